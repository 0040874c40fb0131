use std::io::{stdout, BufWriter, Write};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::api::HttpTransactionsApi;
use crate::forms::{FormError, NewTransactionForm, SearchForm, Submission};
use crate::store::{SystemClock, TransactionsStore};
use crate::views::{write_csv, write_summary, write_table, Summary};

#[derive(Debug, Parser)]
#[command(name = "money-tracker", version, about = "Record and browse income/outcome transactions kept by a JSON REST API")]
pub struct Cli {
    /// Base address of the API serving the `transactions` resource
    #[arg(long, global = true, env = "MONEY_TRACKER_API_URL", default_value = HttpTransactionsApi::DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Available log levels: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "error")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List transactions, newest first, followed by their totals
    List {
        /// Free-text filter sent to the API
        #[arg(long, short)]
        query: Option<String>,
        /// Print CSV instead of a table
        #[arg(long)]
        csv: bool
    },
    /// Register a new transaction
    New {
        #[arg(long)]
        description: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        category: String,
        /// income or outcome
        #[arg(long = "type", default_value = "income")]
        transaction_type: String
    },
    /// Print income, outcome and balance totals
    Summary {
        #[arg(long, short)]
        query: Option<String>
    }
}

pub async fn run(command: Command, api_url: &str) -> Result<()> {
    let api = HttpTransactionsApi::new(api_url)?;
    let store = TransactionsStore::new(Arc::new(api), Arc::new(SystemClock));

    match command {
        Command::List { query, csv } => list(&store, query, csv).await,
        Command::New { description, price, category, transaction_type } => {
            let mut form = NewTransactionForm::new();
            form.open();
            form.set_description(description);
            form.set_price(price);
            form.set_category(category);
            form.set_transaction_type(transaction_type);

            create(&store, form).await
        }
        Command::Summary { query } => summary(&store, query).await
    }
}

async fn search(store: &TransactionsStore, query: Option<String>) -> Result<()> {
    store.ready().await?;

    if let Some(query) = query {
        let mut form = SearchForm::new();
        form.set_query(query);
        form.submit(&store.fetch_transactions()).await?;
    }

    Ok(())
}

async fn list(store: &TransactionsStore, query: Option<String>, csv: bool) -> Result<()> {
    let mut listing = store.select(|state| state.transactions.clone());

    search(store, query).await?;
    listing.poll_changed();

    let transactions = listing.current();
    info!("Listing {} transactions", transactions.len());

    let mut output = BufWriter::new(stdout().lock());

    if csv {
        write_csv(&mut output, transactions)?;
    } else {
        write_table(&mut output, transactions)?;
        writeln!(output)?;
        write_summary(&mut output, &Summary::from_transactions(transactions))?;
    }

    output.flush()?;

    Ok(())
}

async fn create(store: &TransactionsStore, mut form: NewTransactionForm) -> Result<()> {
    let created = match form.submit(&store.create_transaction()).await? {
        Submission::Completed(created) => created,
        Submission::Invalid => return Err(FormError::Invalid(form.errors().to_vec()).into()),
        Submission::Ignored => return Err(anyhow!("New transaction form was not open"))
    };

    info!("Created transaction [{}]", created.id);

    let mut output = BufWriter::new(stdout().lock());
    write_table(&mut output, std::slice::from_ref(&created))?;
    output.flush()?;

    Ok(())
}

async fn summary(store: &TransactionsStore, query: Option<String>) -> Result<()> {
    search(store, query).await?;

    let summary = Summary::from_transactions(&store.transactions());

    let mut output = BufWriter::new(stdout().lock());
    write_summary(&mut output, &summary)?;
    output.flush()?;

    Ok(())
}
