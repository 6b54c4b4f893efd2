//! Typed UNet operations on top of a [`Client`].

use crate::api::{
    AllocateEIPRequest, AllocateEIPResponse, BindEIPRequest, CreateSecurityGroupRequest,
    DeleteSecurityGroupRequest, DescribeEIPRequest, DescribeEIPResponse,
    DescribeSecurityGroupRequest, DescribeSecurityGroupResourceRequest,
    DescribeSecurityGroupResourceResponse, DescribeSecurityGroupResponse,
    GrantSecurityGroupRequest, ModifyEIPBandwidthRequest, ModifyEIPWeightRequest,
    ReleaseEIPRequest, SetEIPPayModeRequest, UnBindEIPRequest, UpdateEIPAttributeRequest,
    UpdateSecurityGroupRequest,
};
use crate::types::{Eip, SecurityGroup};
use thiserror::Error;
use ucloud_api::{Client, ResponseHeader};

/// Result type alias for UNet operations.
pub type Result<T> = std::result::Result<T, UNetError>;

/// Errors from UNet operations.
#[derive(Debug, Error)]
pub enum UNetError {
    /// Error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] ucloud_api::Error),

    /// The elastic IP does not exist (or no longer exists).
    #[error("elastic IP not found: {0}")]
    EipNotFound(String),

    /// The security group does not exist (or no longer exists).
    #[error("security group not found: {0}")]
    GroupNotFound(i64),
}

/// Typed UNet operations.
#[derive(Debug, Clone)]
pub struct UNetClient {
    client: Client,
}

impl UNetClient {
    /// Wrap an API client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Allocate elastic IPs and return them.
    pub async fn allocate_eip(&self, request: &AllocateEIPRequest) -> Result<Vec<Eip>> {
        let response: AllocateEIPResponse = self.client.call(request).await?;
        tracing::info!(
            count = response.eip_set.len(),
            operator = %request.operator_name,
            "elastic IPs allocated"
        );
        Ok(response.eip_set)
    }

    /// List elastic IPs.
    pub async fn describe_eip(&self, request: &DescribeEIPRequest) -> Result<DescribeEIPResponse> {
        Ok(self.client.call(request).await?)
    }

    /// Fetch a single elastic IP by id, failing with
    /// [`UNetError::EipNotFound`] when the API knows no such address.
    pub async fn get_eip(&self, eip_id: &str) -> Result<Eip> {
        let request = DescribeEIPRequest {
            eip_ids: vec![eip_id.to_string()],
            ..Default::default()
        };
        let response = self.describe_eip(&request).await?;
        response
            .eip_set
            .into_iter()
            .next()
            .ok_or_else(|| UNetError::EipNotFound(eip_id.to_string()))
    }

    /// Release an elastic IP. It must be unbound first.
    pub async fn release_eip(&self, eip_id: &str) -> Result<()> {
        tracing::info!(eip_id = %eip_id, "releasing elastic IP");
        let request = ReleaseEIPRequest {
            eip_id: eip_id.to_string(),
        };
        let _: ResponseHeader = self.client.call(&request).await?;
        Ok(())
    }

    /// Bind an elastic IP to a resource.
    pub async fn bind_eip(&self, request: &BindEIPRequest) -> Result<()> {
        tracing::debug!(eip_id = %request.eip_id, resource_id = %request.resource_id, "binding elastic IP");
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Unbind an elastic IP from a resource.
    pub async fn unbind_eip(&self, request: &UnBindEIPRequest) -> Result<()> {
        tracing::debug!(eip_id = %request.eip_id, resource_id = %request.resource_id, "unbinding elastic IP");
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Change an elastic IP's name, tag, or remark.
    pub async fn update_eip_attribute(&self, request: &UpdateEIPAttributeRequest) -> Result<()> {
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Change an elastic IP's bandwidth.
    pub async fn modify_eip_bandwidth(&self, request: &ModifyEIPBandwidthRequest) -> Result<()> {
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Change an elastic IP's routing weight.
    pub async fn modify_eip_weight(&self, request: &ModifyEIPWeightRequest) -> Result<()> {
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Switch an elastic IP between bandwidth and traffic billing.
    pub async fn set_eip_pay_mode(&self, request: &SetEIPPayModeRequest) -> Result<()> {
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Create a security group from a rule set.
    pub async fn create_security_group(
        &self,
        request: &CreateSecurityGroupRequest,
    ) -> Result<()> {
        tracing::info!(group_name = %request.group_name, rules = request.rule.len(), "creating security group");
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// List security groups.
    pub async fn describe_security_group(
        &self,
        request: &DescribeSecurityGroupRequest,
    ) -> Result<DescribeSecurityGroupResponse> {
        Ok(self.client.call(request).await?)
    }

    /// Fetch a single security group by id, failing with
    /// [`UNetError::GroupNotFound`] when the API knows no such group.
    pub async fn get_security_group(&self, group_id: i64) -> Result<SecurityGroup> {
        let request = DescribeSecurityGroupRequest {
            group_id,
            ..Default::default()
        };
        let response = self.describe_security_group(&request).await?;
        response
            .data_set
            .into_iter()
            .next()
            .ok_or(UNetError::GroupNotFound(group_id))
    }

    /// List the resource ids a security group is granted to.
    pub async fn describe_security_group_resource(
        &self,
        request: &DescribeSecurityGroupResourceRequest,
    ) -> Result<DescribeSecurityGroupResourceResponse> {
        Ok(self.client.call(request).await?)
    }

    /// Replace a security group's rule set.
    pub async fn update_security_group(
        &self,
        request: &UpdateSecurityGroupRequest,
    ) -> Result<()> {
        tracing::debug!(group_id = request.group_id, rules = request.rule.len(), "updating security group rules");
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Apply a security group to a resource.
    pub async fn grant_security_group(&self, request: &GrantSecurityGroupRequest) -> Result<()> {
        tracing::debug!(group_id = request.group_id, resource_id = %request.resource_id, "granting security group");
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Delete a security group.
    pub async fn delete_security_group(&self, group_id: i64) -> Result<()> {
        tracing::info!(group_id = group_id, "deleting security group");
        let request = DeleteSecurityGroupRequest { group_id };
        let _: ResponseHeader = self.client.call(&request).await?;
        Ok(())
    }
}
