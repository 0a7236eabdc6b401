use async_graphql::Object;
use rand::Rng;

/// A die with a fixed number of sides. Built fresh for every `getDie`
/// query, never stored anywhere.
pub struct RandomDie {
    pub num_sides: i32,
}

impl RandomDie {
    /// Zero counts as unset, same as leaving the argument off.
    pub fn new(num_sides: Option<i32>) -> Self {
        Self {
            num_sides: num_sides.filter(|n| *n != 0).unwrap_or(6),
        }
    }
}

#[Object]
impl RandomDie {
    async fn num_sides(&self) -> i32 {
        self.num_sides
    }

    async fn roll_once(&self) -> i32 {
        roll_die(self.num_sides)
    }

    async fn roll(&self, num_rolls: i32) -> Vec<i32> {
        roll_many(self.num_sides, num_rolls)
    }
}

/// Uniform roll in [1, num_sides]. A non-positive side count gives
/// degenerate values but must not panic, so this avoids range sampling.
pub fn roll_die(num_sides: i32) -> i32 {
    let r: f64 = rand::rng().random();
    (r * num_sides as f64).floor() as i32 + 1
}

/// `num_rolls` independent rolls, in order. Negative counts roll nothing.
pub fn roll_many(num_sides: i32, num_rolls: i32) -> Vec<i32> {
    (0..num_rolls).map(|_| roll_die(num_sides)).collect()
}
