//! Instance operations and lifecycle orchestration.
//!
//! [`UHostClient`] wraps the generic [`Client`] with typed UHost calls and
//! the waits that drive asynchronous lifecycle changes to completion. The
//! multi-step [`UHostClient::resize`] shows the composition pattern: each
//! transport call and each wait is an explicit step, a failing step aborts
//! the whole operation, and no rollback is attempted — the instance stays in
//! whatever state the last successful step produced.

use crate::api::{
    CreateUHostInstanceRequest, DescribeImageRequest, DescribeImageResponse,
    DescribeUHostInstanceRequest, DescribeUHostInstanceResponse, ModifyUHostInstanceNameRequest,
    ModifyUHostInstanceRemarkRequest, ModifyUHostInstanceTagRequest,
    ResetUHostInstancePasswordRequest, ResizeUHostInstanceRequest, StartUHostInstanceRequest,
    StopUHostInstanceRequest, TerminateUHostInstanceRequest,
};
use crate::types::UHostInstance;
use std::fmt;
use std::time::Duration;
use thiserror::Error;
use ucloud_api::{wait_for_state, Client, ResponseHeader, WaitError, WaitSpec};

/// Instance lifecycle state labels as the API reports them.
pub mod state {
    pub const INITIALIZING: &str = "Initializing";
    pub const STARTING: &str = "Starting";
    pub const RUNNING: &str = "Running";
    pub const STOPPING: &str = "Stopping";
    pub const STOPPED: &str = "Stopped";
    pub const REBOOTING: &str = "Rebooting";
    pub const INSTALL_FAIL: &str = "Install Fail";
}

/// Result type alias for UHost operations.
pub type Result<T> = std::result::Result<T, UHostError>;

/// Errors from UHost operations.
#[derive(Debug, Error)]
pub enum UHostError {
    /// Error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] ucloud_api::Error),

    /// The instance does not exist (or no longer exists).
    #[error("instance not found: {0}")]
    NotFound(String),

    /// A wait on the instance state exceeded its deadline.
    #[error("timeout after {timeout:?} waiting for instance state (last observed: {last_state:?})")]
    WaitTimeout {
        /// The deadline that was exceeded.
        timeout: Duration,
        /// Last state label the describe probe reported.
        last_state: Option<String>,
    },

    /// The instance reported a state outside the expected sets while a
    /// fail-fast wait was in progress.
    #[error("unexpected instance state `{0}`")]
    UnexpectedState(String),

    /// A create call succeeded but returned no instance ids.
    #[error("CreateUHostInstance returned no instance ids")]
    EmptyCreateResponse,

    /// One step of a resize sequence failed. The instance is left in
    /// whatever state the last successful step produced; nothing is rolled
    /// back.
    #[error("resize step `{step}` failed for instance {uhost_id}: {source}")]
    ResizeStep {
        /// The step that failed.
        step: ResizeStep,
        /// Instance the sequence was operating on.
        uhost_id: String,
        /// What the step failed with.
        #[source]
        source: Box<UHostError>,
    },
}

impl From<WaitError<UHostError>> for UHostError {
    fn from(err: WaitError<UHostError>) -> Self {
        match err {
            WaitError::Probe(e) => e,
            WaitError::Timeout {
                timeout,
                last_state,
            } => UHostError::WaitTimeout {
                timeout,
                last_state,
            },
            WaitError::UnexpectedState { state } => UHostError::UnexpectedState(state),
        }
    }
}

/// The steps of a [`UHostClient::resize`] sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeStep {
    Stop,
    WaitForStop,
    Resize,
    Start,
    WaitForStart,
}

impl fmt::Display for ResizeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stop => write!(f, "stop"),
            Self::WaitForStop => write!(f, "wait-for-stop"),
            Self::Resize => write!(f, "resize"),
            Self::Start => write!(f, "start"),
            Self::WaitForStart => write!(f, "wait-for-start"),
        }
    }
}

/// Wait spec for a freshly created instance to come up.
pub fn creation_wait() -> WaitSpec {
    WaitSpec::new(&[state::INITIALIZING, state::STARTING], &[state::RUNNING])
}

/// Wait spec for a started instance to reach `Running`.
pub fn start_wait() -> WaitSpec {
    WaitSpec::new(
        &[state::STOPPED, state::STOPPING, state::REBOOTING],
        &[state::RUNNING],
    )
}

/// Wait spec for a stopping instance to reach `Stopped`.
pub fn stop_wait() -> WaitSpec {
    WaitSpec::new(
        &[state::RUNNING, state::STOPPING, state::REBOOTING],
        &[state::STOPPED],
    )
}

/// Typed UHost operations on top of a [`Client`].
#[derive(Debug, Clone)]
pub struct UHostClient {
    client: Client,
}

impl UHostClient {
    /// Wrap an API client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// List instances.
    pub async fn describe(
        &self,
        request: &DescribeUHostInstanceRequest,
    ) -> Result<DescribeUHostInstanceResponse> {
        Ok(self.client.call(request).await?)
    }

    /// List images.
    pub async fn describe_images(
        &self,
        request: &DescribeImageRequest,
    ) -> Result<DescribeImageResponse> {
        Ok(self.client.call(request).await?)
    }

    /// Fetch a single instance by id; `None` when the API knows no such
    /// instance.
    pub async fn get_instance(&self, uhost_id: &str) -> Result<Option<UHostInstance>> {
        let request = DescribeUHostInstanceRequest {
            uhost_ids: vec![uhost_id.to_string()],
            ..Default::default()
        };
        let response: DescribeUHostInstanceResponse = self.client.call(&request).await?;
        Ok(response.uhost_set.into_iter().next())
    }

    /// Create instances and return the new ids.
    pub async fn create(&self, request: &CreateUHostInstanceRequest) -> Result<Vec<String>> {
        let response: crate::api::CreateUHostInstanceResponse = self.client.call(request).await?;
        tracing::info!(ids = ?response.uhost_ids, "instances created");
        Ok(response.uhost_ids)
    }

    /// Create one instance and wait until it is `Running`.
    ///
    /// Returns the running instance as last observed by the wait's describe
    /// probe.
    pub async fn create_and_wait(
        &self,
        request: &CreateUHostInstanceRequest,
        spec: &WaitSpec,
    ) -> Result<UHostInstance> {
        let ids = self.create(request).await?;
        let uhost_id = ids.into_iter().next().ok_or(UHostError::EmptyCreateResponse)?;
        tracing::debug!(uhost_id = %uhost_id, "waiting for created instance to run");
        self.wait_for_instance_state(&uhost_id, spec).await
    }

    /// Power an instance off. Asynchronous server-side: pair with
    /// [`stop_wait`].
    pub async fn stop(&self, request: &StopUHostInstanceRequest) -> Result<()> {
        tracing::debug!(uhost_id = %request.uhost_id, "stopping instance");
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Power an instance on. Asynchronous server-side: pair with
    /// [`start_wait`].
    pub async fn start(&self, request: &StartUHostInstanceRequest) -> Result<()> {
        tracing::debug!(uhost_id = %request.uhost_id, "starting instance");
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Delete an instance.
    pub async fn terminate(&self, request: &TerminateUHostInstanceRequest) -> Result<()> {
        tracing::info!(uhost_id = %request.uhost_id, "terminating instance");
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Rename an instance.
    pub async fn modify_name(&self, request: &ModifyUHostInstanceNameRequest) -> Result<()> {
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Change an instance's remark text.
    pub async fn modify_remark(&self, request: &ModifyUHostInstanceRemarkRequest) -> Result<()> {
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Re-tag an instance.
    pub async fn modify_tag(&self, request: &ModifyUHostInstanceTagRequest) -> Result<()> {
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Reset the login password of a stopped instance.
    pub async fn reset_password(
        &self,
        request: &ResetUHostInstancePasswordRequest,
    ) -> Result<()> {
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Issue the raw resize call. The instance must already be stopped; most
    /// callers want [`UHostClient::resize`] instead.
    pub async fn apply_resize(&self, request: &ResizeUHostInstanceRequest) -> Result<()> {
        let _: ResponseHeader = self.client.call(request).await?;
        Ok(())
    }

    /// Poll the instance with describe calls until its state label matches
    /// the spec's target set.
    ///
    /// A missing instance is a probe error and aborts the wait immediately,
    /// as does any transport or remote-status failure of the describe call.
    pub async fn wait_for_instance_state(
        &self,
        uhost_id: &str,
        spec: &WaitSpec,
    ) -> Result<UHostInstance> {
        let instance = wait_for_state(spec, move || async move {
            match self.get_instance(uhost_id).await {
                Ok(Some(instance)) => {
                    let state = instance.state.clone();
                    Ok((instance, state))
                }
                Ok(None) => Err(UHostError::NotFound(uhost_id.to_string())),
                Err(e) => Err(e),
            }
        })
        .await?;
        Ok(instance)
    }

    /// Resize an instance, restarting it around the change.
    ///
    /// Runs the full sequence: stop, wait for `Stopped`, resize, start, wait
    /// for `Running`. Each step's failure aborts the operation immediately
    /// and is reported as [`UHostError::ResizeStep`] naming the step; the
    /// instance is left where the last successful step put it.
    pub async fn resize(
        &self,
        request: &ResizeUHostInstanceRequest,
        stop_spec: &WaitSpec,
        start_spec: &WaitSpec,
    ) -> Result<UHostInstance> {
        let uhost_id = request.uhost_id.as_str();
        tracing::info!(
            uhost_id = %uhost_id,
            cpu = request.cpu,
            memory = request.memory,
            disk_space = request.disk_space,
            "resizing instance"
        );

        let stop = StopUHostInstanceRequest {
            uhost_id: request.uhost_id.clone(),
            zone: request.zone.clone(),
        };
        self.stop(&stop)
            .await
            .map_err(|e| step_failure(ResizeStep::Stop, uhost_id, e))?;
        self.wait_for_instance_state(uhost_id, stop_spec)
            .await
            .map_err(|e| step_failure(ResizeStep::WaitForStop, uhost_id, e))?;

        self.apply_resize(request)
            .await
            .map_err(|e| step_failure(ResizeStep::Resize, uhost_id, e))?;

        let start = StartUHostInstanceRequest {
            uhost_id: request.uhost_id.clone(),
            zone: request.zone.clone(),
        };
        self.start(&start)
            .await
            .map_err(|e| step_failure(ResizeStep::Start, uhost_id, e))?;
        let instance = self
            .wait_for_instance_state(uhost_id, start_spec)
            .await
            .map_err(|e| step_failure(ResizeStep::WaitForStart, uhost_id, e))?;

        tracing::info!(uhost_id = %uhost_id, "resize complete");
        Ok(instance)
    }
}

fn step_failure(step: ResizeStep, uhost_id: &str, source: UHostError) -> UHostError {
    tracing::warn!(step = %step, uhost_id = %uhost_id, error = %source, "resize step failed");
    UHostError::ResizeStep {
        step,
        uhost_id: uhost_id.to_string(),
        source: Box::new(source),
    }
}
