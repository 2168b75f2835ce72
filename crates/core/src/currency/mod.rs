//! Multi-currency conversion and exchange-rate context.

pub mod conversion;
pub mod exchange;

#[cfg(test)]
mod props;

pub use conversion::convert_amount;
pub use exchange::ExchangeContext;
