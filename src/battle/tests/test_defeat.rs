#[cfg(test)]
mod tests {
    use crate::battle::controller::PlayerAction;
    use crate::battle::engine::BattleSession;
    use crate::battle::state::{BattleEvent, BattleOutcome, EventBus};
    use crate::battle::tests::common::{
        aquamy, create_test_trainer, flamkip, springleaf, ScriptedController, TestMonsterBuilder,
    };
    use crate::errors::ActionError;
    use crate::progression::HpGrowthPolicy;
    use crate::rng::ScriptedRng;
    use crate::trainer::Trainer;
    use pretty_assertions::assert_eq;

    fn wild_flamkip() -> crate::monster::Individual {
        TestMonsterBuilder::new(flamkip()).with_name("Wild Flamkip").build()
    }

    #[test]
    fn test_defeat_detected_after_last_member_faints() {
        let mut trainer =
            create_test_trainer(vec![TestMonsterBuilder::new(springleaf()).with_hp(2).build()]);
        let mut session =
            BattleSession::new(&mut trainer, 0, wild_flamkip(), HpGrowthPolicy::Incremental)
                .unwrap();
        let mut controller = ScriptedController::new(vec![]);
        let mut events = EventBus::new();

        assert!(!session.check_defeat());
        session
            .play_round(&mut controller, &mut ScriptedRng::new(), &mut events)
            .unwrap();

        assert!(session.check_defeat());
        assert_eq!(session.outcome(), BattleOutcome::InProgress);
    }

    #[test]
    fn test_defeat_heals_whole_team() {
        let mut trainer = create_test_trainer(vec![
            TestMonsterBuilder::new(springleaf()).with_hp(0).build(),
            TestMonsterBuilder::new(aquamy()).with_hp(2).build(),
        ]);
        let mut controller = ScriptedController::new(vec![]);
        let mut events = EventBus::new();

        let outcome = {
            let mut session = BattleSession::with_first_living(
                &mut trainer,
                wild_flamkip(),
                HpGrowthPolicy::Incremental,
            )
            .unwrap();
            assert_eq!(session.active_index(), 1);
            session
                .run_to_completion(&mut controller, &mut ScriptedRng::new(), &mut events)
                .unwrap()
        };

        assert_eq!(outcome, BattleOutcome::PlayerLost);
        for member in trainer.team() {
            assert_eq!(member.hp(), member.max_hp());
        }
        assert!(controller.observed.contains(&BattleEvent::TeamHealed {
            trainer: "Sacha".to_string()
        }));
    }

    #[test]
    fn test_lost_battle_can_be_followed_by_a_new_one() {
        let mut trainer =
            create_test_trainer(vec![TestMonsterBuilder::new(springleaf()).with_hp(1).build()]);
        let mut events = EventBus::new();
        {
            let mut session = BattleSession::with_first_living(
                &mut trainer,
                wild_flamkip(),
                HpGrowthPolicy::Incremental,
            )
            .unwrap();
            session
                .run_to_completion(&mut ScriptedController::new(vec![]), &mut ScriptedRng::new(), &mut events)
                .unwrap();
        }

        let rematch = BattleSession::with_first_living(
            &mut trainer,
            wild_flamkip(),
            HpGrowthPolicy::Incremental,
        );
        assert!(rematch.is_ok());
    }

    #[test]
    fn test_no_living_lead() {
        let mut trainer =
            create_test_trainer(vec![TestMonsterBuilder::new(springleaf()).with_hp(0).build()]);
        let result =
            BattleSession::with_first_living(&mut trainer, wild_flamkip(), HpGrowthPolicy::Incremental);
        assert_eq!(result.err(), Some(ActionError::NoEligibleCreature));

        let mut empty = Trainer::new(1, "Nobody", 0);
        let result =
            BattleSession::with_first_living(&mut empty, wild_flamkip(), HpGrowthPolicy::Incremental);
        assert_eq!(result.err(), Some(ActionError::EmptyTeam));
    }

    #[test]
    fn test_invalid_lead_index() {
        let mut trainer = create_test_trainer(vec![TestMonsterBuilder::new(springleaf()).build()]);
        let result = BattleSession::new(&mut trainer, 4, wild_flamkip(), HpGrowthPolicy::Incremental);
        assert_eq!(result.err(), Some(ActionError::InvalidTeamIndex(4)));
    }

    #[test]
    fn test_attacking_until_defeat() {
        let mut trainer =
            create_test_trainer(vec![TestMonsterBuilder::new(springleaf()).build()]);
        let wild = TestMonsterBuilder::new(flamkip())
            .with_name("Wild Flamkip")
            .with_defense(200)
            .build();
        let mut controller = ScriptedController::always(PlayerAction::Attack);
        let mut events = EventBus::new();

        let outcome = {
            let mut session =
                BattleSession::new(&mut trainer, 0, wild, HpGrowthPolicy::Incremental).unwrap();
            session
                .run_to_completion(&mut controller, &mut ScriptedRng::new(), &mut events)
                .unwrap()
        };

        // 60 HP lost 7 at a time takes 9 rounds; the player got 8 turns in.
        assert_eq!(outcome, BattleOutcome::PlayerLost);
        assert_eq!(controller.decisions, 8);
        assert_eq!(trainer.team()[0].hp(), 60);
    }
}
