//! Domain entity representing a subscription plan.

/// A subscription tier members can be enrolled in.
///
/// Plan names are unique across the system.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub status: bool,
}

impl Plan {
    /// Creates a new Plan instance.
    pub fn new(id: i64, name: String, price: f64, status: bool) -> Self {
        Self {
            id,
            name,
            price,
            status,
        }
    }
}

/// Input data for creating a new plan.
#[derive(Debug, Clone)]
pub struct NewPlan {
    pub name: String,
    pub price: f64,
    pub status: bool,
}

/// Partial update for an existing plan.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct PlanUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub status: Option<bool>,
}

impl PlanUpdate {
    /// Returns true if no field would be changed.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.status.is_none()
    }
}
