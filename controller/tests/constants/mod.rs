use multiversx_sc::types::{TestAddress, TestTokenIdentifier};
use multiversx_sc_scenario::imports::MxscPath;

pub const CONTROLLER_PATH: MxscPath = MxscPath::new("output/exen-controller.mxsc.json");
pub const AGGREGATOR_PATH: MxscPath =
    MxscPath::new("../aggregator_mock/output/aggregator-mock.mxsc.json");
pub const SALE_VENUE_PATH: MxscPath = MxscPath::new("../swap_mock/output/swap-mock.mxsc.json");
pub const SINK_PATH: MxscPath = MxscPath::new("../sink_mock/output/sink-mock.mxsc.json");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const FUNDER_ADDRESS: TestAddress = TestAddress::new("funder");
pub const BORROWER_ADDRESS: TestAddress = TestAddress::new("borrower");
pub const SECOND_BORROWER_ADDRESS: TestAddress = TestAddress::new("second-borrower");
pub const KEEPER_ADDRESS: TestAddress = TestAddress::new("keeper");

pub const COLLATERAL_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("EXEN-123456");
pub const COLLATERAL_DECIMALS: usize = 18;
pub const COLLATERAL_TICKER: &[u8] = b"EXEN";

pub const STABLE_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-123456");
pub const STABLE_DECIMALS: usize = 6;
pub const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-123456");

pub const USD_TICKER: &[u8] = b"USD";

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const MAX_PRICE_STALE_SECONDS: u64 = 15 * 60;

// Default lending parameters of a freshly deployed pool
pub const DEFAULT_ACTIVATION_THRESHOLD_USD: u64 = 50_000;
pub const DEFAULT_MIN_PRINCIPAL_USD: u64 = 100;

// Venue execution price, in stable minor units per whole collateral token
pub const VENUE_PRICE_TEN_CENTS: u64 = 100_000;
