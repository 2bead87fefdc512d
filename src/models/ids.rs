//! ID alias for rows of the application's user table (a Postgres `integer` serial).

pub type UserId = i32;
