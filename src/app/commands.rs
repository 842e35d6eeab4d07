//! Subcommands of the `airflow-client` binary.

use crate::adapters::http::ApiClient;
use crate::app::api::{TaskInstanceKey, ALL_DAGS};
use crate::core::params::{
    ListOrder, LogOptions, Pagination, TaskInstanceFilter, UpdateMask, DEFAULT_PAGE_LIMIT,
};
use crate::core::{fetch_all, Collection, PageSource};
use crate::domain::model::{
    ClearTaskInstance, Connection, DagRun, DagState, Pool, TaskState, Variable,
};
use crate::utils::error::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    /// Maximum number of items to return
    #[arg(long)]
    pub limit: Option<u32>,

    /// Number of items to skip
    #[arg(long)]
    pub offset: Option<u32>,

    /// Follow pages until every item was read
    #[arg(long, conflicts_with_all = ["limit", "offset"])]
    pub all: bool,
}

impl PageArgs {
    fn pagination(&self) -> Pagination {
        Pagination::new(self.limit, self.offset)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// DAGs, their tasks and source files
    #[command(subcommand)]
    Dags(DagCommand),
    #[command(subcommand)]
    DagRuns(DagRunCommand),
    #[command(subcommand)]
    TaskInstances(TaskInstanceCommand),
    #[command(subcommand)]
    Xcom(XComCommand),
    #[command(subcommand)]
    Pools(PoolCommand),
    #[command(subcommand)]
    Variables(VariableCommand),
    #[command(subcommand)]
    Connections(ConnectionCommand),
    #[command(subcommand)]
    ImportErrors(ImportErrorCommand),
    #[command(subcommand)]
    EventLogs(EventLogCommand),
    /// Health of the metadatabase and scheduler
    Health,
    /// Server version
    Version,
}

#[derive(Debug, Clone, Subcommand)]
pub enum DagCommand {
    List(PageArgs),
    Get { dag_id: String },
    Details { dag_id: String },
    Pause { dag_id: String },
    Unpause { dag_id: String },
    Tasks { dag_id: String },
    Task { dag_id: String, task_id: String },
    Source { file_token: String },
    /// Clear task instances of a DAG. Without flags the server only
    /// reports which failed task instances would be cleared.
    Clear {
        dag_id: String,
        /// Clear for real instead of reporting
        #[arg(long)]
        no_dry_run: bool,
        /// Also clear task instances that did not fail
        #[arg(long)]
        include_succeeded: bool,
        #[arg(long)]
        only_running: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum DagRunCommand {
    List {
        /// Omit to list runs of every DAG
        #[arg(default_value = ALL_DAGS)]
        dag_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Get {
        dag_id: String,
        dag_run_id: String,
    },
    Trigger {
        dag_id: String,
        #[arg(long)]
        run_id: Option<String>,
        /// JSON object passed to the run
        #[arg(long)]
        conf: Option<String>,
    },
    /// Set the state of a run
    SetState {
        dag_id: String,
        dag_run_id: String,
        state: DagState,
    },
    Delete {
        dag_id: String,
        dag_run_id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum TaskInstanceCommand {
    List {
        dag_id: String,
        dag_run_id: String,
        #[arg(long = "state")]
        states: Vec<TaskState>,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
    Get {
        dag_id: String,
        dag_run_id: String,
        task_id: String,
    },
    Log {
        dag_id: String,
        dag_run_id: String,
        task_id: String,
        try_number: u32,
        #[arg(long)]
        full_content: bool,
        /// Token returned with the previous chunk
        #[arg(long)]
        continuation_token: Option<String>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum XComCommand {
    List {
        dag_id: String,
        dag_run_id: String,
        task_id: String,
    },
    Get {
        dag_id: String,
        dag_run_id: String,
        task_id: String,
        key: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum PoolCommand {
    List(PageArgs),
    Get { name: String },
    Create { name: String, slots: i32 },
    /// Change the number of slots of a pool
    Resize { name: String, slots: i32 },
    Delete { name: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum VariableCommand {
    List(PageArgs),
    Get { key: String },
    Set { key: String, value: String },
    Delete { key: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConnectionCommand {
    List(PageArgs),
    Get { connection_id: String },
    Create { connection_id: String, conn_type: String },
    Delete { connection_id: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ImportErrorCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        order_by: Option<String>,
    },
    Get { import_error_id: i32 },
    Delete { import_error_id: i32 },
}

#[derive(Debug, Clone, Subcommand)]
pub enum EventLogCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
        #[arg(long)]
        order_by: Option<String>,
    },
    Get { event_log_id: i32 },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn log_deleted(what: &str, id: &str) {
    tracing::info!("🗑️ Deleted {} {}", what, id);
}

fn order(order_by: Option<&str>) -> ListOrder {
    order_by.map(ListOrder::by).unwrap_or_default()
}

/// 單頁或 `--all` 讀取全部
async fn list<S>(source: &S, page: &PageArgs) -> Result<()>
where
    S: PageSource,
    S::Page: Serialize,
    <S::Page as Collection>::Item: Serialize,
{
    if page.all {
        let items = fetch_all(source, DEFAULT_PAGE_LIMIT).await?;
        tracing::info!("📥 Fetched {} items", items.len());
        print_json(&items)
    } else {
        print_json(&source.fetch_page(page.pagination()).await?)
    }
}

impl Command {
    pub async fn run(&self, client: &ApiClient) -> Result<()> {
        match self {
            Command::Dags(cmd) => cmd.run(client).await,
            Command::DagRuns(cmd) => cmd.run(client).await,
            Command::TaskInstances(cmd) => cmd.run(client).await,
            Command::Xcom(cmd) => cmd.run(client).await,
            Command::Pools(cmd) => cmd.run(client).await,
            Command::Variables(cmd) => cmd.run(client).await,
            Command::Connections(cmd) => cmd.run(client).await,
            Command::ImportErrors(cmd) => cmd.run(client).await,
            Command::EventLogs(cmd) => cmd.run(client).await,
            Command::Health => {
                let health = client.monitoring().get_health().await?;
                if !health.is_healthy() {
                    tracing::warn!("⚠️ Airflow reports an unhealthy component");
                }
                print_json(&health)
            }
            Command::Version => print_json(&client.monitoring().get_version().await?),
        }
    }
}

impl DagCommand {
    async fn run(&self, client: &ApiClient) -> Result<()> {
        let api = client.dags();
        match self {
            DagCommand::List(page) => list(&api, page).await,
            DagCommand::Get { dag_id } => print_json(&api.get_dag(dag_id).await?),
            DagCommand::Details { dag_id } => print_json(&api.get_dag_details(dag_id).await?),
            DagCommand::Pause { dag_id } => print_json(&api.set_paused(dag_id, true).await?),
            DagCommand::Unpause { dag_id } => print_json(&api.set_paused(dag_id, false).await?),
            DagCommand::Tasks { dag_id } => print_json(&api.get_tasks(dag_id).await?),
            DagCommand::Task { dag_id, task_id } => {
                print_json(&api.get_task(dag_id, task_id).await?)
            }
            DagCommand::Source { file_token } => {
                let source = api.get_dag_source(file_token).await?;
                println!("{}", source.content.unwrap_or_default());
                Ok(())
            }
            DagCommand::Clear {
                dag_id,
                no_dry_run,
                include_succeeded,
                only_running,
            } => {
                // 未指定的旗標不送出，沿用伺服器預設 (dry_run、only_failed 皆為 true)
                let request = ClearTaskInstance {
                    dry_run: no_dry_run.then_some(false),
                    only_failed: include_succeeded.then_some(false),
                    only_running: only_running.then_some(true),
                    ..ClearTaskInstance::default()
                };
                print_json(&api.post_clear_task_instances(dag_id, &request).await?)
            }
        }
    }
}

impl DagRunCommand {
    async fn run(&self, client: &ApiClient) -> Result<()> {
        let api = client.dag_runs();
        match self {
            DagRunCommand::List { dag_id, page } => list(&api.pages(dag_id.as_str()), page).await,
            DagRunCommand::Get { dag_id, dag_run_id } => {
                print_json(&api.get_dag_run(dag_id, dag_run_id).await?)
            }
            DagRunCommand::Trigger {
                dag_id,
                run_id,
                conf,
            } => {
                let mut dag_run = DagRun::trigger(run_id.clone());
                if let Some(conf) = conf {
                    dag_run = dag_run.with_conf(serde_json::from_str(conf)?);
                }
                let created = api.post_dag_run(dag_id, &dag_run).await?;
                tracing::info!(
                    "🚀 Triggered {} as {}",
                    dag_id,
                    created.dag_run_id.as_deref().unwrap_or("?")
                );
                print_json(&created)
            }
            DagRunCommand::SetState {
                dag_id,
                dag_run_id,
                state,
            } => {
                let update = DagRun {
                    state: Some(*state),
                    ..DagRun::default()
                };
                let mask = UpdateMask::new(["state"]);
                print_json(&api.patch_dag_run(dag_id, dag_run_id, &update, &mask).await?)
            }
            DagRunCommand::Delete { dag_id, dag_run_id } => {
                api.delete_dag_run(dag_id, dag_run_id).await?;
                log_deleted("DAG run", dag_run_id);
                Ok(())
            }
        }
    }
}

impl TaskInstanceCommand {
    async fn run(&self, client: &ApiClient) -> Result<()> {
        let api = client.task_instances();
        match self {
            TaskInstanceCommand::List {
                dag_id,
                dag_run_id,
                states,
                limit,
                offset,
            } => {
                let filter = TaskInstanceFilter {
                    pagination: Pagination::new(*limit, *offset),
                    state: states.clone(),
                    ..TaskInstanceFilter::default()
                };
                print_json(&api.get_task_instances(dag_id, dag_run_id, &filter).await?)
            }
            TaskInstanceCommand::Get {
                dag_id,
                dag_run_id,
                task_id,
            } => print_json(&api.get_task_instance(dag_id, dag_run_id, task_id).await?),
            TaskInstanceCommand::Log {
                dag_id,
                dag_run_id,
                task_id,
                try_number,
                full_content,
                continuation_token,
            } => {
                let options = LogOptions {
                    full_content: full_content.then_some(true),
                    token: continuation_token.clone(),
                };
                let log = api
                    .get_log(dag_id, dag_run_id, task_id, *try_number, &options)
                    .await?;
                println!("{}", log.content.as_deref().unwrap_or_default());
                if let Some(next) = &log.continuation_token {
                    tracing::info!("📄 More log available, continue with --continuation-token {}", next);
                }
                Ok(())
            }
        }
    }
}

impl XComCommand {
    async fn run(&self, client: &ApiClient) -> Result<()> {
        let api = client.xcom();
        match self {
            XComCommand::List {
                dag_id,
                dag_run_id,
                task_id,
            } => {
                let task = TaskInstanceKey::new(dag_id, dag_run_id, task_id);
                print_json(&api.get_xcom_entries(task, Pagination::default()).await?)
            }
            XComCommand::Get {
                dag_id,
                dag_run_id,
                task_id,
                key,
            } => {
                let task = TaskInstanceKey::new(dag_id, dag_run_id, task_id);
                print_json(&api.get_xcom_entry(task, key).await?)
            }
        }
    }
}

impl PoolCommand {
    async fn run(&self, client: &ApiClient) -> Result<()> {
        let api = client.pools();
        match self {
            PoolCommand::List(page) => list(&api, page).await,
            PoolCommand::Get { name } => print_json(&api.get_pool(name).await?),
            PoolCommand::Create { name, slots } => {
                print_json(&api.post_pool(&Pool::new(name.clone(), *slots)).await?)
            }
            PoolCommand::Resize { name, slots } => {
                let update = Pool {
                    slots: Some(*slots),
                    ..Pool::default()
                };
                let mask = UpdateMask::new(["slots"]);
                print_json(&api.patch_pool(name, &update, &mask).await?)
            }
            PoolCommand::Delete { name } => {
                api.delete_pool(name).await?;
                log_deleted("pool", name);
                Ok(())
            }
        }
    }
}

impl VariableCommand {
    async fn run(&self, client: &ApiClient) -> Result<()> {
        let api = client.variables();
        match self {
            VariableCommand::List(page) => list(&api, page).await,
            VariableCommand::Get { key } => print_json(&api.get_variable(key).await?),
            VariableCommand::Set { key, value } => print_json(
                &api.post_variables(&Variable::new(key.clone(), value.clone()))
                    .await?,
            ),
            VariableCommand::Delete { key } => {
                api.delete_variable(key).await?;
                log_deleted("variable", key);
                Ok(())
            }
        }
    }
}

impl ConnectionCommand {
    async fn run(&self, client: &ApiClient) -> Result<()> {
        let api = client.connections();
        match self {
            ConnectionCommand::List(page) => list(&api, page).await,
            ConnectionCommand::Get { connection_id } => {
                print_json(&api.get_connection(connection_id).await?)
            }
            ConnectionCommand::Create {
                connection_id,
                conn_type,
            } => print_json(
                &api.post_connection(&Connection::new(connection_id.clone(), conn_type.clone()))
                    .await?,
            ),
            ConnectionCommand::Delete { connection_id } => {
                api.delete_connection(connection_id).await?;
                log_deleted("connection", connection_id);
                Ok(())
            }
        }
    }
}

impl ImportErrorCommand {
    async fn run(&self, client: &ApiClient) -> Result<()> {
        let api = client.import_errors();
        match self {
            ImportErrorCommand::List { page, order_by } => {
                list(&api.ordered(order(order_by.as_deref())), page).await
            }
            ImportErrorCommand::Get { import_error_id } => {
                print_json(&api.get_import_error(*import_error_id).await?)
            }
            ImportErrorCommand::Delete { import_error_id } => {
                api.delete_import_error(*import_error_id).await?;
                log_deleted("import error", &import_error_id.to_string());
                Ok(())
            }
        }
    }
}

impl EventLogCommand {
    async fn run(&self, client: &ApiClient) -> Result<()> {
        let api = client.event_logs();
        match self {
            EventLogCommand::List { page, order_by } => {
                list(&api.ordered(order(order_by.as_deref())), page).await
            }
            EventLogCommand::Get { event_log_id } => {
                print_json(&api.get_event_log(*event_log_id).await?)
            }
        }
    }
}
