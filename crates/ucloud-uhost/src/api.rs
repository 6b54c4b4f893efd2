//! Typed requests and responses for the UHost actions.
//!
//! Each request writes its own wire parameters; the action name comes from
//! the type name per the [`ucloud_api::Request`] convention. Optional
//! numeric fields follow the protocol's zero-means-absent rule, so leaving a
//! field at its default keeps it off the wire.

use crate::types::{UHostImage, UHostInstance};
use serde::Deserialize;
use ucloud_api::{impl_response, EncodeError, ParameterSet, Request, ResponseHeader};

/// List instances, optionally narrowed by zone, ids, or tag.
#[derive(Debug, Clone, Default)]
pub struct DescribeUHostInstanceRequest {
    pub zone: String,
    pub uhost_ids: Vec<String>,
    pub tag: String,
    pub offset: i64,
    pub limit: i64,
}

impl Request for DescribeUHostInstanceRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("Zone", &self.zone);
        params.set_seq("UHostIds", &self.uhost_ids)?;
        params.set_str("Tag", &self.tag);
        params.set_int("Offset", self.offset);
        params.set_int("Limit", self.limit);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeUHostInstanceResponse {
    #[serde(flatten)]
    pub header: ResponseHeader,
    #[serde(rename = "TotalCount", default)]
    pub total_count: i64,
    #[serde(rename = "UHostSet", default)]
    pub uhost_set: Vec<UHostInstance>,
}

/// Create one or more instances from an image.
#[derive(Debug, Clone, Default)]
pub struct CreateUHostInstanceRequest {
    pub zone: String,
    pub image_id: String,
    pub login_mode: String,
    /// Base64-encoded when `login_mode` is `Password`.
    pub password: String,
    pub key_pair: String,
    pub cpu: i64,
    pub memory: i64,
    pub storage_type: String,
    pub disk_space: i64,
    pub name: String,
    pub network_id: String,
    pub security_group_id: String,
    pub charge_type: String,
    pub quantity: i64,
    pub uhost_type: String,
    pub net_capability: String,
    pub tag: String,
    pub coupon_id: String,
    pub project_id: i64,
    pub boot_disk_space: i64,
}

impl Request for CreateUHostInstanceRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("Zone", &self.zone);
        params.set_str("ImageId", &self.image_id);
        params.set_str("LoginMode", &self.login_mode);
        params.set_str("Password", &self.password);
        params.set_str("KeyPair", &self.key_pair);
        params.set_int("CPU", self.cpu);
        params.set_int("Memory", self.memory);
        params.set_str("StorageType", &self.storage_type);
        params.set_int("DiskSpace", self.disk_space);
        params.set_str("Name", &self.name);
        params.set_str("NetworkId", &self.network_id);
        params.set_str("SecurityGroupId", &self.security_group_id);
        params.set_str("ChargeType", &self.charge_type);
        params.set_int("Quantity", self.quantity);
        params.set_str("UHostType", &self.uhost_type);
        params.set_str("NetCapability", &self.net_capability);
        params.set_str("Tag", &self.tag);
        params.set_str("CouponId", &self.coupon_id);
        params.set_int("ProjectId", self.project_id);
        params.set_int("BootDiskSpace", self.boot_disk_space);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUHostInstanceResponse {
    #[serde(flatten)]
    pub header: ResponseHeader,
    #[serde(rename = "UHostIds", default)]
    pub uhost_ids: Vec<String>,
}

macro_rules! id_and_zone_request {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub uhost_id: String,
            pub zone: String,
        }

        impl Request for $name {
            fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
                params.set_str("UHostId", &self.uhost_id);
                params.set_str("Zone", &self.zone);
                Ok(())
            }
        }
    };
}

id_and_zone_request!(
    /// Delete an instance.
    TerminateUHostInstanceRequest
);
id_and_zone_request!(
    /// Power an instance off. Asynchronous: poll for `Stopped`.
    StopUHostInstanceRequest
);
id_and_zone_request!(
    /// Power an instance on. Asynchronous: poll for `Running`.
    StartUHostInstanceRequest
);

/// Rename an instance.
#[derive(Debug, Clone, Default)]
pub struct ModifyUHostInstanceNameRequest {
    pub uhost_id: String,
    pub zone: String,
    pub name: String,
}

impl Request for ModifyUHostInstanceNameRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("UHostId", &self.uhost_id);
        params.set_str("Zone", &self.zone);
        params.set_str("Name", &self.name);
        Ok(())
    }
}

/// Change an instance's remark text.
#[derive(Debug, Clone, Default)]
pub struct ModifyUHostInstanceRemarkRequest {
    pub uhost_id: String,
    pub zone: String,
    pub remark: String,
}

impl Request for ModifyUHostInstanceRemarkRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("UHostId", &self.uhost_id);
        params.set_str("Zone", &self.zone);
        params.set_str("Remark", &self.remark);
        Ok(())
    }
}

/// Re-tag an instance.
#[derive(Debug, Clone, Default)]
pub struct ModifyUHostInstanceTagRequest {
    pub uhost_id: String,
    pub zone: String,
    pub tag: String,
}

impl Request for ModifyUHostInstanceTagRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("UHostId", &self.uhost_id);
        params.set_str("Zone", &self.zone);
        params.set_str("Tag", &self.tag);
        Ok(())
    }
}

/// Reset the login password. The instance must be stopped.
#[derive(Debug, Clone, Default)]
pub struct ResetUHostInstancePasswordRequest {
    pub uhost_id: String,
    pub zone: String,
    /// Base64-encoded.
    pub password: String,
}

impl Request for ResetUHostInstancePasswordRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("UHostId", &self.uhost_id);
        params.set_str("Zone", &self.zone);
        params.set_str("Password", &self.password);
        Ok(())
    }
}

/// Change an instance's CPU, memory, or data disk size. The instance must be
/// stopped; see [`crate::UHostClient::resize`] for the full
/// stop/resize/start sequence.
#[derive(Debug, Clone, Default)]
pub struct ResizeUHostInstanceRequest {
    pub uhost_id: String,
    pub zone: String,
    pub cpu: i64,
    pub memory: i64,
    pub disk_space: i64,
}

impl Request for ResizeUHostInstanceRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("UHostId", &self.uhost_id);
        params.set_str("Zone", &self.zone);
        params.set_int("CPU", self.cpu);
        params.set_int("Memory", self.memory);
        params.set_int("DiskSpace", self.disk_space);
        Ok(())
    }
}

/// List available images.
#[derive(Debug, Clone, Default)]
pub struct DescribeImageRequest {
    pub zone: String,
    pub image_type: String,
    pub os_type: String,
    pub image_id: String,
    pub offset: i64,
    pub limit: i64,
}

impl Request for DescribeImageRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("Zone", &self.zone);
        params.set_str("ImageType", &self.image_type);
        params.set_str("OsType", &self.os_type);
        params.set_str("ImageId", &self.image_id);
        params.set_int("Offset", self.offset);
        params.set_int("Limit", self.limit);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeImageResponse {
    #[serde(flatten)]
    pub header: ResponseHeader,
    #[serde(rename = "TotalCount", default)]
    pub total_count: i64,
    #[serde(rename = "ImageSet", default)]
    pub image_set: Vec<UHostImage>,
}

impl_response!(
    DescribeUHostInstanceResponse,
    CreateUHostInstanceResponse,
    DescribeImageResponse,
);
