pub mod fixed_price_oracle;

pub use fixed_price_oracle::FixedPriceOracle;
