/// Shared constants used across the leadsheet CLI and core library.
pub mod endpoint {
    /// Host that serves deployed Apps Script web apps.
    pub const EXPECTED_HOST: &str = "script.google.com";

    /// Path segment present in every web-app deployment URL.
    pub const SCRIPT_PATH_SEGMENT: &str = "/macros/s/";

    /// Suffix of an executable web-app deployment URL.
    pub const EXEC_SUFFIX: &str = "/exec";

    /// Example URL shown when a supplied endpoint fails validation.
    pub const EXAMPLE_URL: &str = "https://script.google.com/macros/s/AKfycb.../exec";
}

pub mod api {
    /// Query parameter carrying the requested backend action.
    pub const ACTION_PARAM: &str = "action";

    /// Fetch the remote application configuration document.
    pub const ACTION_GET_CONFIG: &str = "getConfig";

    /// Fetch previously submitted lead rows.
    pub const ACTION_GET_ENTRIES: &str = "getEntries";

    /// Connectivity probe.
    pub const ACTION_TEST: &str = "test";

    /// Append a lead row to the spreadsheet.
    pub const ACTION_SUBMIT_LEAD: &str = "submitLead";

    /// `status` value the backend reports for an accepted submission.
    pub const STATUS_SUCCESS: &str = "success";
}

pub mod cache {
    /// Cache key for the remote application configuration document.
    pub const APP_CONFIG_KEY: &str = "app-config.json";

    /// Environment variable that overrides the response cache TTL in milliseconds.
    pub const CACHE_TTL_ENV: &str = "LEADSHEET_CACHE_TTL_MS";

    /// Default response cache TTL in milliseconds (5 minutes).
    pub const DEFAULT_CACHE_TTL_MS: u64 = 5 * 60 * 1000;

    /// Environment variable that overrides the cache directory.
    pub const CACHE_DIR_ENV: &str = "LEADSHEET_CACHE_DIR";
}

pub mod storage {
    /// File holding the persisted endpoint settings.
    pub const SETTINGS_FILE_NAME: &str = "settings.json";

    /// Environment variable that overrides the settings directory.
    pub const SETTINGS_DIR_ENV: &str = "LEADSHEET_CONFIG_DIR";

    /// Directory name used for platform config/cache locations.
    pub const APP_DIR_NAME: &str = "leadsheet";
}
