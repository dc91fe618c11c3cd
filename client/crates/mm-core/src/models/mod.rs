pub mod candidate;
pub mod gender;
pub mod identity;
pub mod like_record;
pub mod match_record;
pub mod role;
pub mod user_id;
