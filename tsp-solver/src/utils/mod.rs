mod parallel;
pub(crate) use self::parallel::*;
