use serde::{Deserialize, Serialize};
use validator::Validate;

/// Price range entered by the user on the welcome panel
///
/// Both bounds must be non-negative. The upper bound is lowered to the
/// dataset's price ceiling before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PriceFilterRequest {
    #[validate(range(min = 0))]
    pub from: i32,
    #[validate(range(min = 0))]
    pub to: i32,
}

impl PriceFilterRequest {
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// Lower `to` to `ceiling` when it exceeds it
    pub fn clamp_to(self, ceiling: i32) -> Self {
        Self {
            from: self.from,
            to: self.to.min(ceiling),
        }
    }
}
