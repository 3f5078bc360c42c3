//! Constants for the PhonePe connector

// ===== API ENDPOINTS =====
pub const PAY_PATH: &str = "/pg/v1/pay";

// ===== CHECKSUM =====
pub const CHECKSUM_SEPARATOR: &str = "###";
pub const DEFAULT_SALT_INDEX: &str = "1";

// ===== INSTRUMENT TYPES =====
pub const PAY_PAGE: &str = "PAY_PAGE";

// ===== REDIRECT MODES =====
pub const REDIRECT_MODE_POST: &str = "POST";

// ===== HEADERS =====
pub const X_VERIFY: &str = "X-VERIFY";

// ===== BASE URLS =====
pub const SANDBOX_BASE_URL: &str = "https://api-preprod.phonepe.com/apis/pg-sandbox";
