//! Check descriptor

use crate::piece::PieceId;

/// "King X is attacked by pieces {P1, P2, …}"
///
/// The attacker set is never empty; a position without attackers is
/// represented by the absence of a `Check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    king: PieceId,
    attackers: Vec<PieceId>,
}

impl Check {
    /// `None` when nobody attacks the king
    pub fn new(king: PieceId, attackers: Vec<PieceId>) -> Option<Self> {
        if attackers.is_empty() {
            None
        } else {
            Some(Self { king, attackers })
        }
    }

    pub fn king(&self) -> PieceId {
        self.king
    }

    pub fn attackers(&self) -> &[PieceId] {
        &self.attackers
    }

    /// Two or more attackers: only king moves can answer it
    pub fn double_check(&self) -> bool {
        self.attackers.len() > 1
    }
}
