//! WASM bindings for the frontend

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::escrow::commission_of;
use crate::moves::Move;
use crate::resolver::{resolve, Outcome, Verdict};

#[derive(serde::Serialize)]
struct Resolution {
    outcome: Outcome,
    description: String,
}

fn parse_move(index: u8) -> Result<Move, JsError> {
    Move::from_index(index)
        .filter(|m| m.is_playable())
        .ok_or_else(|| JsError::new(&format!("Invalid move: {}", index)))
}

/// Resolve two moves given by wire index (1 = Rock, 2 = Paper, 3 = Scissors)
///
/// # Returns
/// `{outcome, description}`
#[wasm_bindgen]
pub fn resolve_moves(move1: u8, move2: u8) -> Result<JsValue, JsError> {
    let move1 = parse_move(move1)?;
    let move2 = parse_move(move2)?;

    let result = Resolution {
        outcome: resolve(move1, move2),
        description: Verdict::of_match(move1, move2).to_string(),
    };

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct MoveInfo {
    index: u8,
    name: String,
    beats: String,
}

/// Get all playable moves
#[wasm_bindgen]
pub fn get_move_types() -> Result<JsValue, JsError> {
    let types: Vec<MoveInfo> = Move::PLAYABLE
        .iter()
        .map(|m| MoveInfo {
            index: m.index(),
            name: m.name().to_string(),
            beats: Move::PLAYABLE
                .iter()
                .find(|other| m.beats(**other))
                .map(|other| other.name().to_string())
                .unwrap_or_default(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(serde::Serialize)]
struct Split {
    commission: u64,
    prize: u64,
}

/// Split a decisive pot between owner and winner
#[wasm_bindgen]
pub fn describe_commission(pot: u64, commission: u8) -> Result<JsValue, JsError> {
    if commission > crate::config::MAX_COMMISSION {
        return Err(JsError::new("Commission must be between 0 and 100"));
    }
    let cut = commission_of(pot, commission)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&Split { commission: cut, prize: pot - cut })
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
