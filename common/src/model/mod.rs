pub mod asset;
pub mod pairing;
pub mod upload;
