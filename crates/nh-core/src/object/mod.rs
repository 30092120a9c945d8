//! Objects a monster can carry off after a steal-class blow.
//!
//! Trimmed to the subset `combat::blow`'s `EatGold`/`EatItem` handlers and
//! `Monster::held` need; object generation, naming, and containers are the
//! inventory subsystem's concern and live outside this engine.

mod obj;
mod objclass;

pub use obj::{BucStatus, Object, ObjectId, ObjectLocation};
pub use objclass::{ArmorCategory, DirectionType, Material, ObjClassDef, ObjectClass};
