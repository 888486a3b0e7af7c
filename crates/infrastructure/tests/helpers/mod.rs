pub use builders::*;
