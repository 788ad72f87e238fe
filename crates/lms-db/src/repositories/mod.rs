// All repository functions are generic over `E: Executor<'e, Database = Postgres>`
// so they accept both a `&PgPool` (direct query) and a `&mut Transaction` (atomic operations).

pub mod code;
pub mod course;
pub mod quiz;
pub mod score;
pub mod student;
pub mod topic;
pub mod video;
pub mod viewed;
