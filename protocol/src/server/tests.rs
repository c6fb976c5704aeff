#[cfg(test)]
mod tests {
    use crate::{
        BattleOutcome, MoveCategory, Side, parse_items_reply, parse_learn_move_reply,
        parse_team_reply, parse_turn_result,
    };

    #[test]
    fn test_parse_attack_exchange() {
        let body = r#"{
            "turn_info": {
                "player_first": true,
                "second_skipped": false,
                "player_move": {"name": "Tackle", "type": "normal", "category": "physical"},
                "opponent_move": {"name": "Ember", "type": "fire", "category": "special"}
            },
            "player_hp": 80, "player_max_hp": 100,
            "opponent_hp": 50, "opponent_max_hp": 100,
            "log": ["Le combat commence !"]
        }"#;
        let result = parse_turn_result(body).unwrap();
        let ti = result.turn_info.as_ref().unwrap();

        assert!(ti.player_first);
        assert_eq!(ti.player_move.as_ref().unwrap().category, MoveCategory::Physical);
        assert_eq!(ti.opponent_move.as_ref().unwrap().move_type, "fire");
        assert_eq!(result.hp(Side::Player), Some((80, 100)));
        assert_eq!(result.hp(Side::Opponent), Some((50, 100)));
        assert_eq!(result.log, vec!["Le combat commence !".to_string()]);
        assert!(!result.battle_ended);
    }

    #[test]
    fn test_parse_battle_end() {
        let body = r#"{"log": [], "battle_ended": true, "result": "victory", "exp_gained": 120}"#;
        let result = parse_turn_result(body).unwrap();

        assert!(result.battle_ended);
        assert_eq!(result.result, Some(BattleOutcome::Victory));
        assert_eq!(result.exp_gained, Some(120));
        assert!(result.turn_info.is_none());
    }

    #[test]
    fn test_parse_unknown_outcome() {
        let body = r#"{"battle_ended": true, "result": "draw"}"#;
        let result = parse_turn_result(body).unwrap();

        assert_eq!(result.result, Some(BattleOutcome::Unknown));
    }

    #[test]
    fn test_parse_interrupts() {
        let body = r#"{
            "log": [],
            "pending_evolution": {
                "evolution_id": 7, "from_name": "Salameche", "to_name": "Reptincel",
                "stats_before": {"hp": 39, "attack": 52}
            },
            "pending_moves": [
                {"move_id": 3, "move_name": "Flammeche", "move_type": "fire", "move_pp": 25,
                 "current_moves": [{"id": 1, "name": "Griffe", "type": "normal", "pp": 35}]}
            ]
        }"#;
        let result = parse_turn_result(body).unwrap();
        let evo = result.pending_evolution.unwrap();

        assert_eq!(evo.evolution_id, 7);
        assert_eq!(evo.stats_before.attack, 52);
        assert_eq!(evo.stats_before.speed, 0);
        assert_eq!(result.pending_moves.len(), 1);
        assert_eq!(result.pending_moves[0].current_moves[0].name, "Griffe");
    }

    #[test]
    fn test_hp_falls_back_to_snapshot_max() {
        let body = r#"{"player_hp": 12, "player_pokemon": {"id": 4, "name": "Pikachu", "max_hp": 40}}"#;
        let result = parse_turn_result(body).unwrap();

        assert_eq!(result.hp(Side::Player), Some((12, 40)));
        assert_eq!(result.hp(Side::Opponent), None);
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_turn_result("").is_err());
        assert!(parse_turn_result("   ").is_err());
    }

    #[test]
    fn test_parse_not_json_object() {
        assert!(parse_turn_result("<html>Server Error</html>").is_err());
        assert!(parse_turn_result("[1, 2]").is_err());
    }

    #[test]
    fn test_parse_team() {
        let body = r#"{"team": [
            {"id": 1, "species": {"name": "Pikachu"}, "current_hp": 0, "max_hp": 35},
            {"id": 2, "nickname": "Bubulle", "species": {"name": "Carapuce"}, "current_hp": 20, "max_hp": 44}
        ]}"#;
        let team = parse_team_reply(body).unwrap();
        let alive = team.available_switches();

        assert_eq!(alive.len(), 1);
        assert_eq!(alive[0].display_name(), "Bubulle");
        assert_eq!(team.team[0].display_name(), "Pikachu");
    }

    #[test]
    fn test_parse_learn_move_reply() {
        let reply = parse_learn_move_reply(r#"{"message": "Appris !"}"#).unwrap();
        assert_eq!(reply.message.as_deref(), Some("Appris !"));
        assert!(reply.moves.is_none());
    }

    #[test]
    fn test_parse_items_reply() {
        let body = r#"{"items": [
            {"id": 3, "name": "Potion", "item_type": "potion", "quantity": 2},
            {"id": 4, "name": "Poke Ball", "item_type": "pokeball", "quantity": 5}
        ]}"#;
        let reply = parse_items_reply(body).unwrap();

        assert_eq!(reply.items.len(), 2);
        assert!(!reply.items[0].is_ball());
        assert!(reply.items[1].is_ball());
        assert!(parse_items_reply("{}").unwrap().items.is_empty());
    }
}
