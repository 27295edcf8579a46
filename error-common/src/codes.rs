// Standardized error codes for the Actions Console Engine

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1001";
    pub const MISSING_REQUIRED_FIELD: &str = "VALIDATION_1002";
    pub const INVALID_FORMAT: &str = "VALIDATION_1003";
    pub const INSECURE_TRANSPORT: &str = "VALIDATION_1004";
}

pub mod configuration {
    pub const FILE_UNREADABLE: &str = "CONFIG_2001";
    pub const PARSE_FAILED: &str = "CONFIG_2002";
    pub const UNKNOWN_MESSAGE_KEY: &str = "CONFIG_2003";
}

pub mod system {
    pub const LOGGING_INIT_FAILED: &str = "SYS_3001";
    pub const INTERNAL: &str = "SYS_3002";
}
