//! UHost compute instances and images.
//!
//! Typed operations over the generic [`ucloud_api`] client, plus the
//! lifecycle plumbing instances need: state-label constants, wait presets for
//! creation/start/stop convergence, and the orchestrated resize sequence.
//!
//! ```text
//!    UHostClient
//!        │
//!        ├── describe / create / stop / start / terminate ...   (api.rs)
//!        │        │
//!        │        ▼
//!        │   ucloud_api::Client ── signed GET ──▶ API endpoint
//!        │
//!        └── wait_for_instance_state / resize                (instance.rs)
//!                 │
//!                 └── describe probe ──▶ ucloud_api::wait_for_state
//! ```
//!
//! # Example
//!
//! ```no_run
//! use ucloud_api::{Client, ClientConfig};
//! use ucloud_uhost::{creation_wait, CreateUHostInstanceRequest, UHostClient};
//!
//! # async fn run() -> Result<(), ucloud_uhost::UHostError> {
//! let client = Client::new(ClientConfig::from_env()?)?;
//! let uhost = UHostClient::new(client);
//!
//! let request = CreateUHostInstanceRequest {
//!     zone: "cn-bj2-04".into(),
//!     image_id: "f43736e1-65a5-4bea-ad2e-8a46e18883c2".into(),
//!     login_mode: "Password".into(),
//!     password: "VUNsb3VkLmNu".into(),
//!     cpu: 2,
//!     memory: 2048,
//!     disk_space: 10,
//!     name: "Host01".into(),
//!     charge_type: "Month".into(),
//!     quantity: 1,
//!     ..Default::default()
//! };
//! let instance = uhost.create_and_wait(&request, &creation_wait()).await?;
//! println!("{} is {}", instance.uhost_id, instance.state);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod instance;
pub mod types;

pub use api::{
    CreateUHostInstanceRequest, CreateUHostInstanceResponse, DescribeImageRequest,
    DescribeImageResponse, DescribeUHostInstanceRequest, DescribeUHostInstanceResponse,
    ModifyUHostInstanceNameRequest, ModifyUHostInstanceRemarkRequest,
    ModifyUHostInstanceTagRequest, ResetUHostInstancePasswordRequest,
    ResizeUHostInstanceRequest, StartUHostInstanceRequest, StopUHostInstanceRequest,
    TerminateUHostInstanceRequest,
};
pub use instance::{
    creation_wait, start_wait, stop_wait, state, ResizeStep, Result, UHostClient, UHostError,
};
pub use types::{UHostDisk, UHostImage, UHostInstance, UHostIp};
