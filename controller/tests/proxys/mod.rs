
pub use common_proxies::{proxy_revenue_sink, proxy_sale_venue};
