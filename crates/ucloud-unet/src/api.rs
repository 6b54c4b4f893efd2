//! Typed requests and responses for the UNet actions.

use crate::types::{Eip, SecurityGroup, SecurityGroupRule};
use serde::Deserialize;
use ucloud_api::{impl_response, EncodeError, ParameterSet, Request, ResponseHeader};

/// Allocate one or more elastic IPs.
#[derive(Debug, Clone, Default)]
pub struct AllocateEIPRequest {
    /// Carrier line, e.g. `Bgp` or `International`.
    pub operator_name: String,
    /// Bandwidth in Mbps.
    pub bandwidth: i64,
    pub tag: String,
    pub charge_type: String,
    pub quantity: i64,
    pub pay_mode: String,
    pub share_bandwidth_id: String,
    pub name: String,
    pub remark: String,
}

impl Request for AllocateEIPRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("OperatorName", &self.operator_name);
        params.set_int("Bandwidth", self.bandwidth);
        params.set_str("Tag", &self.tag);
        params.set_str("ChargeType", &self.charge_type);
        params.set_int("Quantity", self.quantity);
        params.set_str("PayMode", &self.pay_mode);
        params.set_str("ShareBandwidthId", &self.share_bandwidth_id);
        params.set_str("Name", &self.name);
        params.set_str("Remark", &self.remark);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AllocateEIPResponse {
    #[serde(flatten)]
    pub header: ResponseHeader,
    #[serde(rename = "EIPSet", default)]
    pub eip_set: Vec<Eip>,
}

/// List elastic IPs, optionally narrowed by id.
#[derive(Debug, Clone, Default)]
pub struct DescribeEIPRequest {
    pub eip_ids: Vec<String>,
    pub offset: i64,
    pub limit: i64,
}

impl Request for DescribeEIPRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_seq("EIPIds", &self.eip_ids)?;
        params.set_int("Offset", self.offset);
        params.set_int("Limit", self.limit);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeEIPResponse {
    #[serde(flatten)]
    pub header: ResponseHeader,
    #[serde(rename = "TotalCount", default)]
    pub total_count: i64,
    #[serde(rename = "TotalBandwidth", default)]
    pub total_bandwidth: i64,
    #[serde(rename = "EIPSet", default)]
    pub eip_set: Vec<Eip>,
}

/// Release an elastic IP. It must be unbound first.
#[derive(Debug, Clone, Default)]
pub struct ReleaseEIPRequest {
    pub eip_id: String,
}

impl Request for ReleaseEIPRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("EIPId", &self.eip_id);
        Ok(())
    }
}

macro_rules! eip_binding_request {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            pub eip_id: String,
            /// Bound resource kind, e.g. `uhost`.
            pub resource_type: String,
            pub resource_id: String,
        }

        impl Request for $name {
            fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
                params.set_str("EIPId", &self.eip_id);
                params.set_str("ResourceType", &self.resource_type);
                params.set_str("ResourceId", &self.resource_id);
                Ok(())
            }
        }
    };
}

eip_binding_request!(
    /// Bind an elastic IP to a resource.
    BindEIPRequest
);
eip_binding_request!(
    /// Unbind an elastic IP from a resource.
    UnBindEIPRequest
);

/// Change an elastic IP's name, tag, or remark.
#[derive(Debug, Clone, Default)]
pub struct UpdateEIPAttributeRequest {
    pub eip_id: String,
    pub name: String,
    pub tag: String,
    pub remark: String,
}

impl Request for UpdateEIPAttributeRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("EIPId", &self.eip_id);
        params.set_str("Name", &self.name);
        params.set_str("Tag", &self.tag);
        params.set_str("Remark", &self.remark);
        Ok(())
    }
}

/// Change an elastic IP's bandwidth.
#[derive(Debug, Clone, Default)]
pub struct ModifyEIPBandwidthRequest {
    pub eip_id: String,
    /// New bandwidth in Mbps.
    pub bandwidth: i64,
}

impl Request for ModifyEIPBandwidthRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("EIPId", &self.eip_id);
        params.set_int("Bandwidth", self.bandwidth);
        Ok(())
    }
}

/// Change an elastic IP's routing weight.
#[derive(Debug, Clone, Default)]
pub struct ModifyEIPWeightRequest {
    pub eip_id: String,
    pub weight: i64,
}

impl Request for ModifyEIPWeightRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("EIPId", &self.eip_id);
        params.set_int("Weight", self.weight);
        Ok(())
    }
}

/// Switch an elastic IP between bandwidth and traffic billing.
#[derive(Debug, Clone, Default)]
pub struct SetEIPPayModeRequest {
    pub eip_id: String,
    pub bandwidth: i64,
    /// `Bandwidth` or `Traffic`.
    pub pay_mode: String,
}

impl Request for SetEIPPayModeRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("EIPId", &self.eip_id);
        params.set_int("Bandwidth", self.bandwidth);
        params.set_str("PayMode", &self.pay_mode);
        Ok(())
    }
}

/// Create a security group from a rule set.
#[derive(Debug, Clone, Default)]
pub struct CreateSecurityGroupRequest {
    pub group_name: String,
    pub description: String,
    pub rule: Vec<SecurityGroupRule>,
}

impl Request for CreateSecurityGroupRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("GroupName", &self.group_name);
        params.set_str("Description", &self.description);
        params.set_seq("Rule", &self.rule)?;
        Ok(())
    }
}

/// List security groups, optionally narrowed by id or bound resource.
#[derive(Debug, Clone, Default)]
pub struct DescribeSecurityGroupRequest {
    pub resource_type: String,
    pub resource_id: String,
    pub group_id: i64,
}

impl Request for DescribeSecurityGroupRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_str("ResourceType", &self.resource_type);
        params.set_str("ResourceId", &self.resource_id);
        params.set_int("GroupId", self.group_id);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeSecurityGroupResponse {
    #[serde(flatten)]
    pub header: ResponseHeader,
    #[serde(rename = "DataSet", default)]
    pub data_set: Vec<SecurityGroup>,
}

/// List the resource ids a security group is granted to.
#[derive(Debug, Clone, Default)]
pub struct DescribeSecurityGroupResourceRequest {
    pub group_id: i64,
}

impl Request for DescribeSecurityGroupResourceRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_int("GroupId", self.group_id);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeSecurityGroupResourceResponse {
    #[serde(flatten)]
    pub header: ResponseHeader,
    #[serde(rename = "DataSet", default)]
    pub data_set: Vec<String>,
}

/// Replace a security group's rule set.
#[derive(Debug, Clone, Default)]
pub struct UpdateSecurityGroupRequest {
    pub group_id: i64,
    pub rule: Vec<SecurityGroupRule>,
}

impl Request for UpdateSecurityGroupRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_int("GroupId", self.group_id);
        params.set_seq("Rule", &self.rule)?;
        Ok(())
    }
}

/// Apply a security group to a resource.
#[derive(Debug, Clone, Default)]
pub struct GrantSecurityGroupRequest {
    pub group_id: i64,
    pub resource_type: String,
    pub resource_id: String,
}

impl Request for GrantSecurityGroupRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_int("GroupId", self.group_id);
        params.set_str("ResourceType", &self.resource_type);
        params.set_str("ResourceId", &self.resource_id);
        Ok(())
    }
}

/// Delete a security group.
#[derive(Debug, Clone, Default)]
pub struct DeleteSecurityGroupRequest {
    pub group_id: i64,
}

impl Request for DeleteSecurityGroupRequest {
    fn write_params(&self, params: &mut ParameterSet) -> Result<(), EncodeError> {
        params.set_int("GroupId", self.group_id);
        Ok(())
    }
}

impl_response!(
    AllocateEIPResponse,
    DescribeEIPResponse,
    DescribeSecurityGroupResponse,
    DescribeSecurityGroupResourceResponse,
);
