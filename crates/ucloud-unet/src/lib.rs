//! UNet elastic IPs and security groups.
//!
//! Typed operations over the generic [`ucloud_api`] client. Security group
//! rules show the composite-parameter encoding: each rule renders as one
//! pipe-joined scalar (`TCP|3306|0.0.0.0/0|DROP|50`) inside an indexed
//! `Rule.<i>` sequence.
//!
//! # Example
//!
//! ```no_run
//! use ucloud_api::{Client, ClientConfig};
//! use ucloud_unet::{AllocateEIPRequest, BindEIPRequest, UNetClient};
//!
//! # async fn run() -> Result<(), ucloud_unet::UNetError> {
//! let client = Client::new(ClientConfig::from_env()?)?;
//! let unet = UNetClient::new(client);
//!
//! let eips = unet
//!     .allocate_eip(&AllocateEIPRequest {
//!         operator_name: "Bgp".into(),
//!         bandwidth: 2,
//!         charge_type: "Month".into(),
//!         quantity: 1,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! unet.bind_eip(&BindEIPRequest {
//!     eip_id: eips[0].eip_id.clone(),
//!     resource_type: "uhost".into(),
//!     resource_id: "uhost-abc123".into(),
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod net;
pub mod types;

pub use api::{
    AllocateEIPRequest, AllocateEIPResponse, BindEIPRequest, CreateSecurityGroupRequest,
    DeleteSecurityGroupRequest, DescribeEIPRequest, DescribeEIPResponse,
    DescribeSecurityGroupRequest, DescribeSecurityGroupResourceRequest,
    DescribeSecurityGroupResourceResponse, DescribeSecurityGroupResponse,
    GrantSecurityGroupRequest, ModifyEIPBandwidthRequest, ModifyEIPWeightRequest,
    ReleaseEIPRequest, SetEIPPayModeRequest, UnBindEIPRequest, UpdateEIPAttributeRequest,
    UpdateSecurityGroupRequest,
};
pub use net::{Result, UNetClient, UNetError};
pub use types::{Eip, EipAddr, EipResource, SecurityGroup, SecurityGroupRule};
