//! UNet resource shapes as the API reports them.

use serde::Deserialize;
use ucloud_api::{EncodeError, Parameterize};

/// The resource an elastic IP is bound to.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EipResource {
    #[serde(rename = "ResourceID", default)]
    pub resource_id: String,
    #[serde(rename = "ResourceType", default)]
    pub resource_type: String,
    #[serde(rename = "ResourceName", default)]
    pub resource_name: String,
    #[serde(rename = "Zone", default)]
    pub zone: String,
}

/// One address of an elastic IP, per carrier line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EipAddr {
    #[serde(rename = "OperatorName", default)]
    pub operator_name: String,
    #[serde(rename = "IP", default)]
    pub ip: String,
}

/// An elastic IP.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Eip {
    #[serde(rename = "EIPId", default)]
    pub eip_id: String,
    #[serde(rename = "Weight", default)]
    pub weight: i64,
    #[serde(rename = "BandwidthType", default)]
    pub bandwidth_type: i64,
    /// Bandwidth in Mbps.
    #[serde(rename = "Bandwidth", default)]
    pub bandwidth: i64,
    /// `used` or `free`.
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "PayMode", default)]
    pub pay_mode: String,
    #[serde(rename = "ChargeType", default)]
    pub charge_type: String,
    #[serde(rename = "CreateTime", default)]
    pub create_time: i64,
    #[serde(rename = "ExpireTime", default)]
    pub expire_time: i64,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Tag", default)]
    pub tag: String,
    #[serde(rename = "Remark", default)]
    pub remark: String,
    /// Absent while the address is unbound.
    #[serde(rename = "Resource", default)]
    pub resource: Option<EipResource>,
    #[serde(rename = "EIPAddr", default)]
    pub eip_addr: Vec<EipAddr>,
}

/// One firewall rule of a security group.
///
/// Rules travel as pipe-joined scalars inside `Rule.<i>` parameters, e.g.
/// `TCP|3306|0.0.0.0/0|DROP|50`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityGroupRule {
    #[serde(rename = "ProtocolType", default)]
    pub protocol_type: String,
    #[serde(rename = "DstPort", default)]
    pub dst_port: String,
    #[serde(rename = "SrcIP", default)]
    pub src_ip: String,
    /// `ACCEPT` or `DROP`.
    #[serde(rename = "RuleAction", default)]
    pub rule_action: String,
    #[serde(rename = "Priority", default)]
    pub priority: i64,
}

impl Parameterize for SecurityGroupRule {
    fn parameterize(&self) -> Result<String, EncodeError> {
        Ok(format!(
            "{}|{}|{}|{}|{}",
            self.protocol_type, self.dst_port, self.src_ip, self.rule_action, self.priority
        ))
    }
}

/// A security group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityGroup {
    #[serde(rename = "GroupId", default)]
    pub group_id: i64,
    #[serde(rename = "GroupName", default)]
    pub group_name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "CreateTime", default)]
    pub create_time: i64,
    /// 0 for user-defined groups, 1 for the recommended presets.
    #[serde(rename = "Type", default)]
    pub group_type: i64,
    #[serde(rename = "FirewallId", default)]
    pub firewall_id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Tag", default)]
    pub tag: String,
    #[serde(rename = "Remark", default)]
    pub remark: String,
    #[serde(rename = "Rule", default)]
    pub rule: Vec<SecurityGroupRule>,
}
