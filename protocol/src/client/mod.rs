/// What to do with a move the combatant could learn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReplacement {
    /// Forget the known move with this id
    Replace(u64),
    /// Keep the current moves
    Skip,
}

impl MoveReplacement {
    fn to_protocol_string(self) -> String {
        match self {
            Self::Replace(id) => id.to_string(),
            Self::Skip => "skip".to_string(),
        }
    }
}

/// Actions the client can send to the battle server
#[derive(Debug, Clone, PartialEq)]
pub enum ActionRequest {
    /// action=attack&move_id=ID
    Attack { move_id: u64 },

    /// action=switch&pokemon_id=ID (+ type=forcedSwitch)
    Switch { pokemon_id: u64, forced: bool },

    /// action=item&item_id=ID
    Item { item_id: u64 },

    /// action=flee
    Flee,

    /// action=confirm_capture&item_id=ID
    ConfirmCapture { item_id: u64 },

    /// action=confirm_evolution&evolution_id=ID
    ConfirmEvolution { evolution_id: u64 },

    /// Posted to the learn-move endpoint rather than the action endpoint
    LearnMove {
        pokemon_id: u64,
        new_move_id: u64,
        replacement: MoveReplacement,
    },
}

impl ActionRequest {
    /// The `action` discriminator, if this request goes to the action endpoint
    pub fn discriminator(&self) -> Option<&'static str> {
        match self {
            Self::Attack { .. } => Some("attack"),
            Self::Switch { .. } => Some("switch"),
            Self::Item { .. } => Some("item"),
            Self::Flee => Some("flee"),
            Self::ConfirmCapture { .. } => Some("confirm_capture"),
            Self::ConfirmEvolution { .. } => Some("confirm_evolution"),
            Self::LearnMove { .. } => None,
        }
    }

    /// Serialize to form fields, CSRF credential last
    pub fn to_form_params(&self, csrf_token: &str) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(4);

        if let Some(action) = self.discriminator() {
            params.push(("action", action.to_string()));
        }

        match self {
            Self::Attack { move_id } => params.push(("move_id", move_id.to_string())),
            Self::Switch { pokemon_id, forced } => {
                if *forced {
                    params.push(("type", "forcedSwitch".to_string()));
                }
                params.push(("pokemon_id", pokemon_id.to_string()));
            }
            Self::Item { item_id } | Self::ConfirmCapture { item_id } => {
                params.push(("item_id", item_id.to_string()))
            }
            Self::Flee => {}
            Self::ConfirmEvolution { evolution_id } => {
                params.push(("evolution_id", evolution_id.to_string()))
            }
            Self::LearnMove {
                pokemon_id,
                new_move_id,
                replacement,
            } => {
                params.push(("new_move_id", new_move_id.to_string()));
                params.push(("replaced_move_id", replacement.to_protocol_string()));
                params.push(("pokemon_id", pokemon_id.to_string()));
            }
        }

        params.push(("csrfmiddlewaretoken", csrf_token.to_string()));
        params
    }
}
