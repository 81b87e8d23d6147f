//! Variable command handlers

use std::collections::HashMap;

use futures::stream::{self, StreamExt};
use log::{debug, error, info, warn};

use crate::cli::{
    Cli, VariableCreateArgs, VariableDeleteArgs, VariableListArgs, VariableParseArgs,
};
use crate::config::api;
use crate::error::TfeError;
use crate::hcp::traits::TfeResource;
use crate::hcp::TfeClient;
use crate::output::output_variables;
use crate::ui::{confirm_action, create_spinner, finish_spinner, finish_spinner_and_clear};
use crate::varfile::{
    encode_var_file, flatten_var_file, parse_var_file, read_var_file,
    split_declarations_to_strings, split_var_file,
};

use super::models::{Variable, VariableCategory, VariableSpec};

/// A planned write against the workspace's variables
#[derive(Debug, Clone, PartialEq)]
enum Upsert {
    Create(VariableSpec),
    Update { id: String, spec: VariableSpec },
}

impl Upsert {
    fn spec(&self) -> &VariableSpec {
        match self {
            Upsert::Create(spec) | Upsert::Update { spec, .. } => spec,
        }
    }
}

/// Run the variable list command
pub async fn run_var_list_command(
    client: &TfeClient,
    cli: &Cli,
    args: &VariableListArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = cli.organization()?;
    let spinner = create_spinner(
        &format!("Fetching variables of workspace '{}'...", args.workspace),
        cli.batch,
    );

    let workspace = client.require_workspace(org, &args.workspace).await;
    let variables = match workspace {
        Ok(ws) => client.get_variables(&ws.id).await,
        Err(e) => Err(e),
    };
    let variables = match variables {
        Ok(vars) => {
            finish_spinner_and_clear(spinner);
            vars
        }
        Err(e) => {
            finish_spinner(spinner, "Failed");
            return Err(e.into());
        }
    };

    debug!(
        "Found {} variables in workspace '{}'",
        variables.len(),
        args.workspace
    );
    output_variables(&variables, cli.format);
    Ok(())
}

/// Parse every `key=value` flag into a spec
fn specs_from_flags(args: &VariableCreateArgs) -> crate::error::Result<Vec<VariableSpec>> {
    use VariableCategory::{Env, Terraform};

    let groups: [(&[String], VariableCategory, bool, bool); 6] = [
        (args.vars.as_slice(), Terraform, false, false),
        (args.svars.as_slice(), Terraform, false, true),
        (args.hvars.as_slice(), Terraform, true, false),
        (args.shvars.as_slice(), Terraform, true, true),
        (args.evars.as_slice(), Env, false, false),
        (args.sevars.as_slice(), Env, false, true),
    ];

    let mut specs = Vec::new();
    for (tokens, category, hcl, sensitive) in groups {
        for token in tokens {
            specs.push(VariableSpec::parse(token, category, hcl, sensitive)?);
        }
    }
    Ok(specs)
}

/// Read `--var-file` and `--env-file` into specs
fn specs_from_files(args: &VariableCreateArgs) -> crate::error::Result<Vec<VariableSpec>> {
    let mut specs = Vec::new();

    if let Some(path) = &args.var_file {
        let flattened = flatten_var_file(&parse_var_file(path)?);
        debug!(
            "{}: {} regular and {} HCL variables",
            path.display(),
            flattened.regular.len(),
            flattened.hcl.len()
        );
        for token in &flattened.regular {
            specs.push(VariableSpec::parse(
                token,
                VariableCategory::Terraform,
                false,
                false,
            )?);
        }
        for token in &flattened.hcl {
            specs.push(VariableSpec::parse(
                token,
                VariableCategory::Terraform,
                true,
                false,
            )?);
        }
    }

    if let Some(path) = &args.env_file {
        for declaration in split_var_file(path)? {
            specs.push(VariableSpec {
                key: declaration.key.clone(),
                value: declaration.value().to_string(),
                category: VariableCategory::Env,
                hcl: false,
                sensitive: false,
            });
        }
    }

    Ok(specs)
}

/// Decide create or update for every spec
///
/// Variables are matched on category and key. Any existing match without
/// `force` fails the whole plan before anything is written.
fn plan_upserts(
    specs: Vec<VariableSpec>,
    existing: &[Variable],
    force: bool,
) -> crate::error::Result<Vec<Upsert>> {
    let index: HashMap<(VariableCategory, &str), &Variable> = existing
        .iter()
        .map(|var| ((var.attributes.category, var.name()), var))
        .collect();

    specs
        .into_iter()
        .map(|spec| match index.get(&(spec.category, spec.key.as_str())) {
            Some(var) if force => Ok(Upsert::Update {
                id: var.id.clone(),
                spec,
            }),
            Some(_) => Err(TfeError::AlreadyExists {
                kind: "variable",
                name: spec.key,
            }),
            None => Ok(Upsert::Create(spec)),
        })
        .collect()
}

/// Run all upserts concurrently, returning the keys that failed
async fn execute_upserts(
    client: &TfeClient,
    workspace_id: &str,
    plan: Vec<Upsert>,
) -> Vec<(String, TfeError)> {
    let results: Vec<(Upsert, crate::error::Result<Variable>)> = stream::iter(plan)
        .map(|upsert| async move {
            let result = match &upsert {
                Upsert::Create(spec) => client.create_variable(workspace_id, spec).await,
                Upsert::Update { id, spec } => {
                    client.update_variable(workspace_id, id, spec).await
                }
            };
            (upsert, result)
        })
        .buffer_unordered(api::MAX_CONCURRENT_PAGE_REQUESTS)
        .collect()
        .await;

    let mut failures = Vec::new();
    for (upsert, result) in results {
        let key = upsert.spec().key.clone();
        match (upsert, result) {
            (Upsert::Create(_), Ok(_)) => info!("Variable '{}' created", key),
            (Upsert::Update { .. }, Ok(_)) => info!("Variable '{}' updated", key),
            (_, Err(e)) => {
                error!("Variable '{}': {}", key, e);
                failures.push((key, e));
            }
        }
    }
    failures
}

/// Run the variable create command
pub async fn run_var_create_command(
    client: &TfeClient,
    cli: &Cli,
    args: &VariableCreateArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = cli.organization()?;

    let mut specs = specs_from_flags(args)?;
    specs.extend(specs_from_files(args)?);
    if specs.is_empty() {
        warn!("No variables given (use --var, --hvar, --evar, --var-file or --env-file)");
        return Ok(());
    }

    let workspace = client.require_workspace(org, &args.workspace).await?;
    let existing = client.get_variables(&workspace.id).await?;
    let plan = plan_upserts(specs, &existing, args.force)?;
    let total = plan.len();

    let spinner = create_spinner(
        &format!(
            "Writing {} variable(s) to workspace '{}'...",
            total, args.workspace
        ),
        cli.batch,
    );
    let failures = execute_upserts(client, &workspace.id, plan).await;

    if failures.is_empty() {
        finish_spinner(spinner, &format!("{} variable(s) written", total));
        Ok(())
    } else {
        finish_spinner(spinner, "Completed with errors");
        let keys: Vec<&str> = failures.iter().map(|(key, _)| key.as_str()).collect();
        Err(format!(
            "{} of {} variable(s) failed: {}",
            failures.len(),
            total,
            keys.join(", ")
        )
        .into())
    }
}

/// Run the variable delete command
pub async fn run_var_delete_command(
    client: &TfeClient,
    cli: &Cli,
    args: &VariableDeleteArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let org = cli.organization()?;
    let workspace = client.require_workspace(org, &args.workspace).await?;
    let variables = client.get_variables(&workspace.id).await?;

    let candidates: Vec<&Variable> = variables
        .iter()
        .filter(|v| v.matches(&args.key))
        .filter(|v| args.category.is_none_or(|c| v.attributes.category == c))
        .collect();

    let variable = match candidates.as_slice() {
        [] => {
            warn!(
                "Variable '{}' not found in workspace '{}'",
                args.key, args.workspace
            );
            return Ok(());
        }
        [variable] => *variable,
        _ => {
            return Err(TfeError::Config(format!(
                "variable '{}' exists in several categories (use --category terraform|env)",
                args.key
            ))
            .into());
        }
    };

    let prompt = format!(
        "Delete variable '{}' from workspace '{}'?",
        variable.name(),
        args.workspace
    );
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        return Err(TfeError::UserCancelled.into());
    }

    client.delete_variable(&workspace.id, &variable.id).await?;
    info!("Variable '{}' deleted", variable.name());
    Ok(())
}

/// Run the variable parse command (offline)
pub fn run_var_parse_command(args: &VariableParseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let tokens: Vec<String> = if args.raw {
        split_declarations_to_strings(&read_var_file(&args.file)?)
    } else {
        encode_var_file(&parse_var_file(&args.file)?)
    };

    for token in tokens {
        println!("{}", token);
    }
    Ok(())
}
