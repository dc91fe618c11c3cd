mod candidate;
mod gender;
mod identity;
mod like_record;
mod match_record;
mod role;
mod user_id;
