// Congress.gov API client and bill record extraction

mod bill;
mod client;

pub use bill::BillRecord;
pub use client::CongressClient;
