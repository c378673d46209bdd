use crate::battle::capture::{calculate_capture_chance, can_attempt_capture, roll_capture_success};
use crate::monster::Individual;
use crate::rng::RngOracle;
use crate::trainer::{Placement, Trainer};
use serde::{Deserialize, Serialize};

/// Result of throwing a capture item at a creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CaptureOutcome {
    /// The target now belongs to the trainer and a copy sits at `Placement`.
    Captured(Placement),
    Failed { chance: f64, roll: u32 },
    /// The target is owned; nothing was rolled or changed.
    NotEligible,
}

/// Resolve one capture attempt.
///
/// On success the target's owner is set to the trainer and the trainer's
/// roster receives it (team if there is room, box otherwise). Renaming is left
/// to the caller, which can reach the stored copy through the placement.
pub fn attempt_capture(
    target: &mut Individual,
    trainer: &mut Trainer,
    base_chance: f64,
    rng: &mut dyn RngOracle,
) -> CaptureOutcome {
    if let Err(error) = can_attempt_capture(target) {
        log::debug!("capture of {} refused: {:?}", target.name(), error);
        return CaptureOutcome::NotEligible;
    }

    let chance = calculate_capture_chance(target, base_chance);
    let (success, roll) = roll_capture_success(chance, rng);
    log::debug!(
        "capture roll for {}: {} against {:.1} ({})",
        target.name(),
        roll,
        chance,
        if success { "success" } else { "fail" }
    );

    if !success {
        return CaptureOutcome::Failed { chance, roll };
    }

    target.owner = Some(trainer.id);
    let placement = trainer.add_captured(target.clone());
    CaptureOutcome::Captured(placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::{bugsyface, springleaf, TestMonsterBuilder};
    use crate::rng::ScriptedRng;
    use crate::trainer::TEAM_CAPACITY;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_owned_target_not_eligible_and_untouched() {
        let mut trainer = Trainer::new(1, "Sacha", 100);
        let mut target = TestMonsterBuilder::new(bugsyface()).with_owner(9).build();
        let before = target.clone();
        // No rolls scripted: an eligible attempt would panic here.
        let mut rng = ScriptedRng::new();

        let outcome = attempt_capture(&mut target, &mut trainer, 100.0, &mut rng);

        assert_eq!(outcome, CaptureOutcome::NotEligible);
        assert_eq!(target, before);
        assert!(trainer.team().is_empty());
        assert!(trainer.boxed().is_empty());
    }

    #[test]
    fn test_successful_capture_transfers_ownership() {
        let mut trainer = Trainer::new(1, "Sacha", 100);
        let mut target = TestMonsterBuilder::new(bugsyface()).build();
        let mut rng = ScriptedRng::new().with_rolls(vec![0]);

        let outcome = attempt_capture(&mut target, &mut trainer, 11.0, &mut rng);

        assert_eq!(outcome, CaptureOutcome::Captured(Placement::Team(0)));
        assert_eq!(target.owner, Some(1));
        assert_eq!(trainer.team()[0].species().name, "Bugsyface");
        assert_eq!(trainer.team()[0].owner, Some(1));
    }

    #[test]
    fn test_failed_capture_changes_nothing() {
        let mut trainer = Trainer::new(1, "Sacha", 100);
        let mut target = TestMonsterBuilder::new(bugsyface()).build();
        let mut rng = ScriptedRng::new().with_rolls(vec![6]);

        let outcome = attempt_capture(&mut target, &mut trainer, 11.0, &mut rng);

        // Full HP: max(5.0, 11 * 0.5)
        assert_eq!(outcome, CaptureOutcome::Failed { chance: 5.5, roll: 6 });
        assert_eq!(target.owner, None);
        assert!(trainer.team().is_empty());
    }

    #[test]
    fn test_seventh_capture_goes_to_box() {
        let mut trainer = Trainer::new(1, "Sacha", 100);
        for _ in 0..TEAM_CAPACITY {
            trainer.add_captured(TestMonsterBuilder::new(springleaf()).build());
        }
        let mut target = TestMonsterBuilder::new(bugsyface()).build();
        let mut rng = ScriptedRng::new().with_rolls(vec![0]);

        let outcome = attempt_capture(&mut target, &mut trainer, 50.0, &mut rng);

        assert_eq!(outcome, CaptureOutcome::Captured(Placement::Box(0)));
        assert_eq!(trainer.team().len(), TEAM_CAPACITY);
        assert_eq!(trainer.boxed().len(), 1);
    }
}
