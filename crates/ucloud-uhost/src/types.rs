//! UHost resource shapes as the API reports them.

use serde::Deserialize;

/// Preference order when picking an instance's primary address: public,
/// operator-agnostic types first, the private network last.
const IP_TYPE_PRIORITY: [&str; 6] = [
    "Bgp",
    "Duplet",
    "China-telecom",
    "China-unicom",
    "Internation",
    "Private",
];

/// One address attached to an instance.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UHostIp {
    /// Address type (`Bgp`, `Private`, ...).
    #[serde(rename = "Type", default)]
    pub ip_type: String,
    /// Id of the attached elastic IP, empty for private addresses.
    #[serde(rename = "IPId", default)]
    pub ip_id: String,
    /// The address itself.
    #[serde(rename = "IP", default)]
    pub ip: String,
    /// Bandwidth in Mbps.
    #[serde(rename = "Bandwidth", default)]
    pub bandwidth: i64,
}

/// One disk attached to an instance.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UHostDisk {
    /// Disk type.
    #[serde(rename = "Type", default)]
    pub disk_type: String,
    /// Disk id.
    #[serde(rename = "DiskId", default)]
    pub disk_id: String,
    /// Disk name.
    #[serde(rename = "Name", default)]
    pub name: i64,
    /// Drive index.
    #[serde(rename = "Drive", default)]
    pub drive: i64,
    /// Size in GB.
    #[serde(rename = "Size", default)]
    pub size: i64,
}

/// A UHost compute instance.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UHostInstance {
    #[serde(rename = "UHostId", default)]
    pub uhost_id: String,
    #[serde(rename = "UHostType", default)]
    pub uhost_type: String,
    #[serde(rename = "Zone", default)]
    pub zone: String,
    #[serde(rename = "StorageType", default)]
    pub storage_type: String,
    #[serde(rename = "ImageId", default)]
    pub image_id: String,
    #[serde(rename = "BasicImageId", default)]
    pub basic_image_id: String,
    #[serde(rename = "BasicImageName", default)]
    pub basic_image_name: String,
    #[serde(rename = "Tag", default)]
    pub tag: String,
    #[serde(rename = "Remark", default)]
    pub remark: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    /// Observed lifecycle state label; see [`crate::instance::state`].
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "CreateTime", default)]
    pub create_time: i64,
    #[serde(rename = "ChargeType", default)]
    pub charge_type: String,
    #[serde(rename = "ExpireTime", default)]
    pub expire_time: i64,
    #[serde(rename = "CPU", default)]
    pub cpu: i64,
    #[serde(rename = "Memory", default)]
    pub memory: i64,
    #[serde(rename = "AutoRenew", default)]
    pub auto_renew: String,
    #[serde(rename = "DiskSet", default)]
    pub disk_set: Vec<UHostDisk>,
    #[serde(rename = "IPSet", default)]
    pub ip_set: Vec<UHostIp>,
    #[serde(rename = "NetCapability", default)]
    pub net_capability: String,
    #[serde(rename = "NetworkState", default)]
    pub network_state: String,
}

impl UHostInstance {
    /// Pick the instance's most useful address: the first attached IP whose
    /// type ranks highest in [`IP_TYPE_PRIORITY`], falling back to the first
    /// attached address of any type. `None` when the instance has no
    /// addresses at all.
    pub fn primary_ip(&self) -> Option<&str> {
        if self.ip_set.is_empty() {
            return None;
        }
        for wanted in IP_TYPE_PRIORITY {
            if let Some(info) = self.ip_set.iter().find(|info| info.ip_type == wanted) {
                return Some(&info.ip);
            }
        }
        Some(&self.ip_set[0].ip)
    }
}

/// A bootable image.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UHostImage {
    #[serde(rename = "ImageId", default)]
    pub image_id: String,
    #[serde(rename = "Zone", default)]
    pub zone: String,
    #[serde(rename = "ImageName", default)]
    pub image_name: String,
    #[serde(rename = "ImageType", default)]
    pub image_type: String,
    #[serde(rename = "ImageSize", default)]
    pub image_size: i64,
    #[serde(rename = "OsType", default)]
    pub os_type: String,
    #[serde(rename = "OsName", default)]
    pub os_name: String,
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "ImageDescription", default)]
    pub image_description: String,
    #[serde(rename = "CreateTime", default)]
    pub create_time: i64,
    #[serde(rename = "Features", default)]
    pub features: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(ip_type: &str, addr: &str) -> UHostIp {
        UHostIp {
            ip_type: ip_type.into(),
            ip: addr.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_primary_ip_prefers_bgp_over_private() {
        let instance = UHostInstance {
            ip_set: vec![ip("Private", "10.0.0.5"), ip("Bgp", "106.75.1.1")],
            ..Default::default()
        };
        assert_eq!(instance.primary_ip(), Some("106.75.1.1"));
    }

    #[test]
    fn test_primary_ip_falls_back_to_first_unknown_type() {
        let instance = UHostInstance {
            ip_set: vec![ip("SomethingNew", "1.2.3.4"), ip("OtherNew", "5.6.7.8")],
            ..Default::default()
        };
        assert_eq!(instance.primary_ip(), Some("1.2.3.4"));
    }

    #[test]
    fn test_primary_ip_none_without_addresses() {
        assert_eq!(UHostInstance::default().primary_ip(), None);
    }

    #[test]
    fn test_instance_decodes_from_wire_names() {
        let instance: UHostInstance = serde_json::from_str(
            r#"{
                "UHostId": "uhost-abc123",
                "State": "Running",
                "CPU": 2,
                "Memory": 2048,
                "IPSet": [{"Type": "Private", "IP": "10.0.0.5", "Bandwidth": 2}],
                "DiskSet": [{"Type": "LOCAL", "DiskId": "disk-1", "Size": 20}]
            }"#,
        )
        .unwrap();
        assert_eq!(instance.uhost_id, "uhost-abc123");
        assert_eq!(instance.state, "Running");
        assert_eq!(instance.cpu, 2);
        assert_eq!(instance.memory, 2048);
        assert_eq!(instance.ip_set[0].ip, "10.0.0.5");
        assert_eq!(instance.disk_set[0].size, 20);
    }
}
