#![no_std]

pub mod proxy_revenue_sink;
pub mod proxy_sale_venue;
