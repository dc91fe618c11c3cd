mod browse;
mod login;
mod matches;
