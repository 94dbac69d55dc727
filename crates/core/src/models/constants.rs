/// Maximum number of rows accepted from one tabular upload.
pub const MAX_RECIPIENTS: usize = 200;

/// Protocol fee in basis points (0.5%).
pub const FEE_BPS: u64 = 50;
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Number of implied decimal places of the base unit (wei per ether).
pub const ETHER_DECIMALS: usize = 18;

/// Per-entry ceiling in ether applied to manual entries only.
pub const MANUAL_ENTRY_MAX_ETHER: f64 = 1000.0;

pub const UNKNOWN_RECIPIENT_NAME: &str = "Unknown";

pub const CSV_EXTENSION: &str = ".csv";
pub const NOT_A_CSV_FILE: &str = "Please upload a CSV file";

/// `BatchPay` deployment on Base Sepolia.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x37957E2e29E79D1A4e66c6DB00bC751927a75fD4";

pub const BATCH_PAY_SIGNATURE: &str = "batchPay(address[],uint256[],string[])";
pub const GET_PAYMENT_HISTORY_SIGNATURE: &str = "getPaymentHistory(address)";

pub const SAMPLE_CSV: &str = "\
0x742d35Cc6634C0532925a3b844Bc9e7595f1Ab21,Alice Johnson,0.5
0x70997970C51812dc3A010C7d01b50e0d17dc79C8,Bob Smith,0.25
0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC,Charlie Brown,0.1
";
