mod config;
mod hash;
mod stress;
mod traits;
mod value;
