//! Move planning: flow-following, fear/flight, hiding, and the final
//! direction-preference encoding consumed by the terrain stepper.

mod fear;
mod flow;
mod planner;

pub use fear::{find_safety, get_fear_moves_aux, mon_will_run};
pub use flow::{get_moves_aux, monster_can_flow, near_permwall};
pub use planner::{find_hiding, get_moves, MoveDecision};
