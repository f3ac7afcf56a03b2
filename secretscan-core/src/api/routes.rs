macro_rules! rpc_v1_path {
    ($path:literal) => {
        concat!("/rpc/v1", $path)
    };
}

/// Versioned RPC route definitions exposed over the plugin socket
pub mod v1 {
    pub const ROOT: &str = "/rpc/v1";
    pub const VERSION: &str = "v1";

    pub mod agent_plugin {
        pub const NAME: &str = rpc_v1_path!("/agent-plugin/name");
        pub const UID: &str = rpc_v1_path!("/agent-plugin/uid");
    }

    pub mod scanners {
        pub const JOBS_STATUS: &str = rpc_v1_path!("/scanners/jobs-status");
        pub const STOP_SCAN: &str = rpc_v1_path!("/scanners/stop");
    }

    pub mod secret_scanner {
        pub const FIND_SECRET_INFO: &str = rpc_v1_path!("/secret-scanner/find");
    }
}
