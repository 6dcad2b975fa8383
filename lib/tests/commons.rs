use es_monitor_bootstrap::bootstrap_resources::BootstrapResources;
use std::env;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use test_context::AsyncTestContext;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

pub const ACCOUNT_ID: &str = "123456789012";
pub const REGION: &str = "sa-east-1";
pub const PROFILE: &str = "es-monitor-bootstrap-test";

#[allow(dead_code)]
pub struct TestContext {
    pub resources: BootstrapResources,
    pub mock_server: MockServer,
}

impl AsyncTestContext for TestContext {
    async fn setup() -> Self {
        let mock_server = MockServer::start().await;

        env::set_var("AWS_ACCESS_KEY_ID", "es-monitor-bootstrap");
        env::set_var("AWS_SECRET_ACCESS_KEY", "es-monitor-bootstrap");
        env::set_var("AWS_REGION", REGION);
        env::set_var("AWS_CONFIG_FILE", "/nonexistent/es-monitor-bootstrap/config");
        env::set_var("AWS_SHARED_CREDENTIALS_FILE", "/nonexistent/es-monitor-bootstrap/credentials");
        env::set_var("AWS_EC2_METADATA_DISABLED", "true");
        env::set_var("LOCAL_ENDPOINT", mock_server.uri());
        env::set_var("LOCAL_REGION", REGION);
        env::remove_var("ROLE_PROPAGATION_DELAY_IN_SECONDS");
        env::remove_var("POLICY_PROPAGATION_DELAY_IN_SECONDS");

        let resources = BootstrapResources::from_profile(PROFILE)
            .await
            .unwrap()
            .with_role_propagation_delay_in_seconds(0)
            .with_policy_propagation_delay_in_seconds(0);

        Self { resources, mock_server }
    }
}

pub struct AwsMock;

#[allow(dead_code)]
impl AwsMock {
    pub async fn caller_identity(ctx: &TestContext) {
        let body = format!(
            r#"<GetCallerIdentityResponse xmlns="https://sts.amazonaws.com/doc/2011-06-15/">
  <GetCallerIdentityResult>
    <Arn>arn:aws:iam::{ACCOUNT_ID}:user/bootstrap</Arn>
    <UserId>AIDAEXAMPLEUSERID</UserId>
    <Account>{ACCOUNT_ID}</Account>
  </GetCallerIdentityResult>
  <ResponseMetadata>
    <RequestId>01234567-89ab-cdef-0123-456789abcdef</RequestId>
  </ResponseMetadata>
</GetCallerIdentityResponse>"#
        );

        Self::mount(ctx, "Action=GetCallerIdentity", ResponseTemplate::new(200).set_body_raw(body, "text/xml")).await;
    }

    pub async fn caller_identity_denied(ctx: &TestContext) {
        Self::mount(
            ctx,
            "Action=GetCallerIdentity",
            Self::error(403, "InvalidClientTokenId", "The security token included in the request is invalid."),
        )
        .await;
    }

    pub async fn create_topic(
        ctx: &TestContext,
        topic_name: &str,
    ) {
        let body = format!(
            r#"<CreateTopicResponse xmlns="http://sns.amazonaws.com/doc/2010-03-31/">
  <CreateTopicResult>
    <TopicArn>arn:aws:sns:{REGION}:{ACCOUNT_ID}:{topic_name}</TopicArn>
  </CreateTopicResult>
  <ResponseMetadata>
    <RequestId>11234567-89ab-cdef-0123-456789abcdef</RequestId>
  </ResponseMetadata>
</CreateTopicResponse>"#
        );

        Self::mount(ctx, &format!("Name={topic_name}"), ResponseTemplate::new(200).set_body_raw(body, "text/xml")).await;
    }

    pub async fn create_topic_rejected(
        ctx: &TestContext,
        topic_name: &str,
    ) {
        Self::mount(
            ctx,
            &format!("Name={topic_name}"),
            Self::error(400, "InvalidParameter", "Invalid parameter: Attributes Reason: Topic already exists with different attributes"),
        )
        .await;
    }

    pub async fn create_role(ctx: &TestContext) {
        Self::mount(ctx, "Action=CreateRole", Self::create_role_response()).await;
    }

    fn create_role_response() -> ResponseTemplate {
        let body = format!(
            r#"<CreateRoleResponse xmlns="https://iam.amazonaws.com/doc/2010-05-08/">
  <CreateRoleResult>
    <Role>
      <Path>/</Path>
      <RoleName>ES-Monitor-SNS</RoleName>
      <RoleId>AROAEXAMPLEROLEID</RoleId>
      <Arn>arn:aws:iam::{ACCOUNT_ID}:role/ES-Monitor-SNS</Arn>
      <CreateDate>2026-10-19T12:00:00Z</CreateDate>
    </Role>
  </CreateRoleResult>
  <ResponseMetadata>
    <RequestId>21234567-89ab-cdef-0123-456789abcdef</RequestId>
  </ResponseMetadata>
</CreateRoleResponse>"#
        );

        ResponseTemplate::new(200).set_body_raw(body, "text/xml")
    }

    pub async fn create_role_already_exists(ctx: &TestContext) {
        Self::mount(ctx, "Action=CreateRole", Self::error(409, "EntityAlreadyExists", "Role with name ES-Monitor-SNS already exists.")).await;
    }

    pub async fn put_role_policy(ctx: &TestContext) {
        Self::mount(ctx, "Action=PutRolePolicy", Self::put_role_policy_response()).await;
    }

    fn put_role_policy_response() -> ResponseTemplate {
        let body = r#"<PutRolePolicyResponse xmlns="https://iam.amazonaws.com/doc/2010-05-08/">
  <ResponseMetadata>
    <RequestId>31234567-89ab-cdef-0123-456789abcdef</RequestId>
  </ResponseMetadata>
</PutRolePolicyResponse>"#;

        ResponseTemplate::new(200).set_body_raw(body, "text/xml")
    }

    pub async fn fresh_account(ctx: &TestContext) {
        Self::caller_identity(ctx).await;
        Self::create_topic(ctx, "es-monitor-vpc-rcf").await;
        Self::create_topic(ctx, "es-monitor-alb-rcf").await;
        Self::create_role(ctx).await;
        Self::put_role_policy(ctx).await;
    }

    /// Fresh account whose role calls record when they were served, as (CreateRole, PutRolePolicy).
    pub async fn timed_fresh_account(ctx: &TestContext) -> (ReceivedAt, ReceivedAt) {
        Self::caller_identity(ctx).await;
        Self::create_topic(ctx, "es-monitor-vpc-rcf").await;
        Self::create_topic(ctx, "es-monitor-alb-rcf").await;

        let create_role_at = ReceivedAt::default();
        Self::mount(
            ctx,
            "Action=CreateRole",
            RecordedResponse {
                template: Self::create_role_response(),
                received_at: create_role_at.clone(),
            },
        )
        .await;

        let put_role_policy_at = ReceivedAt::default();
        Self::mount(
            ctx,
            "Action=PutRolePolicy",
            RecordedResponse {
                template: Self::put_role_policy_response(),
                received_at: put_role_policy_at.clone(),
            },
        )
        .await;

        (create_role_at, put_role_policy_at)
    }

    /// Bodies of the requests received for the given query action.
    pub async fn requests(
        ctx: &TestContext,
        action: &str,
    ) -> Vec<String> {
        let marker = format!("Action={action}");

        ctx.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| String::from_utf8_lossy(&request.body).to_string())
            .filter(|body| body.contains(&marker))
            .collect()
    }

    async fn mount(
        ctx: &TestContext,
        body_marker: &str,
        response: impl Respond + 'static,
    ) {
        Mock::given(method("POST"))
            .and(body_string_contains(body_marker))
            .respond_with(response)
            .mount(&ctx.mock_server)
            .await;
    }

    fn error(
        status: u16,
        code: &str,
        message: &str,
    ) -> ResponseTemplate {
        let body = format!(
            r#"<ErrorResponse>
  <Error>
    <Type>Sender</Type>
    <Code>{code}</Code>
    <Message>{message}</Message>
  </Error>
  <RequestId>41234567-89ab-cdef-0123-456789abcdef</RequestId>
</ErrorResponse>"#
        );

        ResponseTemplate::new(status).set_body_raw(body, "text/xml")
    }
}

#[derive(Clone, Default)]
pub struct ReceivedAt(Arc<Mutex<Vec<Instant>>>);

#[allow(dead_code)]
impl ReceivedAt {
    pub fn first(&self) -> Option<Instant> {
        self.0.lock().unwrap().first().copied()
    }
}

struct RecordedResponse {
    template: ResponseTemplate,
    received_at: ReceivedAt,
}

impl Respond for RecordedResponse {
    fn respond(
        &self,
        _request: &Request,
    ) -> ResponseTemplate {
        self.received_at.0.lock().unwrap().push(Instant::now());
        self.template.clone()
    }
}

#[allow(dead_code)]
pub fn output_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output).lines().map(|line| line.to_string()).collect()
}
