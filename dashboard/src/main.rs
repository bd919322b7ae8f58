use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use error_stack::ResultExt;
use tracing_subscriber::EnvFilter;

use dashboard::aggregate::{self, RATING_BINS, TOP_RATED};
use dashboard::client::CatalogClient;
use dashboard::error::DashboardError;
use dashboard::form::{self, BookChanges, BookForm};
use dashboard::join::join_authors;
use dashboard::select::{self, Selector};
use dashboard::view;

#[derive(Debug, Parser)]
#[command(name = "dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and edit the book catalog from the terminal")]
struct Cli {
    /// Base url of the catalog API
    #[arg(
        long,
        env = "CATALOG_API_URL",
        default_value = "http://127.0.0.1:8080",
        value_name = "URL"
    )]
    api_url: String,

    /// Credential sent as the `api-key` header on changes
    #[arg(long, env = "CATALOG_API_KEY", value_name = "KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List, add, rename or delete authors
    #[command(subcommand)]
    Authors(AuthorCommand),
    /// List, add, edit or delete books
    #[command(subcommand)]
    Books(BookCommand),
    /// Catalog totals and averages
    Summary,
    /// Every chart table: books per author, rating by year, rating
    /// distribution and the top rated books
    Charts,
    /// Ask the API whether the configured key is accepted
    VerifyKey,
}

#[derive(Debug, Subcommand)]
enum AuthorCommand {
    List,
    Add {
        name: String,
    },
    Update {
        /// Author name, or `#id`
        author: Selector,
        name: String,
    },
    Delete {
        /// Author name, or `#id`
        author: Selector,
    },
}

#[derive(Debug, Subcommand)]
enum BookCommand {
    List,
    Add(NewBook),
    Update {
        /// Book title, or `#id`
        book: Selector,
        #[command(flatten)]
        changes: EditBook,
    },
    Delete {
        /// Book title, or `#id`
        book: Selector,
    },
}

#[derive(Debug, Args)]
struct NewBook {
    #[arg(long)]
    title: String,
    /// Author name, or `#id`
    #[arg(long)]
    author: Selector,
    #[arg(long)]
    link: Option<String>,
    /// Comma separated genre ids, e.g. "1,2"
    #[arg(long)]
    genres: String,
    #[arg(long)]
    rating: f64,
    #[arg(long)]
    year: i32,
}

#[derive(Debug, Args)]
struct EditBook {
    #[arg(long)]
    title: Option<String>,
    /// Author name, or `#id`
    #[arg(long)]
    author: Option<Selector>,
    #[arg(long)]
    link: Option<String>,
    #[arg(long)]
    genres: Option<String>,
    #[arg(long)]
    rating: Option<f64>,
    #[arg(long)]
    year: Option<i32>,
}

fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

fn run(cli: Cli) -> error_stack::Result<(), DashboardError> {
    let client = CatalogClient::new(cli.api_url, cli.api_key)?;
    match cli.command {
        Command::Authors(command) => authors(&client, command),
        Command::Books(command) => books(&client, command),
        Command::Summary => {
            let authors = client.list_authors()?;
            let books = client.list_books()?;
            print!("{}", view::summary_table(&aggregate::summarize(&authors, &books)));
            Ok(())
        }
        Command::Charts => {
            let joined = join_authors(&client.list_authors()?, &client.list_books()?);
            println!("Books per author");
            print!("{}", view::books_per_author_table(&aggregate::books_per_author(&joined)));
            println!("\nAverage rating by year");
            print!("{}", view::rating_by_year_table(&aggregate::average_rating_by_year(&joined)));
            println!("\nRating distribution");
            print!("{}", view::histogram_table(&aggregate::rating_histogram(&joined, RATING_BINS)));
            println!("\nTop {TOP_RATED} books");
            print!("{}", view::top_rated_table(&aggregate::top_rated(&joined, TOP_RATED)));
            Ok(())
        }
        Command::VerifyKey => {
            if client.validate_key()? {
                println!("Key accepted.");
                Ok(())
            } else {
                Err(DashboardError::Input("Invalid API Key".to_string()).into())
            }
        }
    }
}

fn authors(
    client: &CatalogClient,
    command: AuthorCommand,
) -> error_stack::Result<(), DashboardError> {
    match command {
        AuthorCommand::List => {
            print!("{}", view::authors_table(&client.list_authors()?));
        }
        AuthorCommand::Add { name } => {
            let author = client.create_author(&form::author_name(&name)?)?;
            println!("Author '{}' added with id {}.", author.name, author.id);
        }
        AuthorCommand::Update { author, name } => {
            let name = form::author_name(&name)?;
            let authors = client.list_authors()?;
            let target = select::author(&authors, &author)?;
            let author = client.update_author(target.id, &name)?;
            println!("Author {} renamed to '{}'.", author.id, author.name);
        }
        AuthorCommand::Delete { author } => {
            let authors = client.list_authors()?;
            let target = select::author(&authors, &author)?;
            let author = client.delete_author(target.id)?;
            println!("Author '{}' deleted.", author.name);
        }
    }
    Ok(())
}

fn books(client: &CatalogClient, command: BookCommand) -> error_stack::Result<(), DashboardError> {
    match command {
        BookCommand::List => {
            let joined = join_authors(&client.list_authors()?, &client.list_books()?);
            print!("{}", view::books_table(&joined));
        }
        BookCommand::Add(new) => {
            let authors = client.list_authors()?;
            let author = select::author(&authors, &new.author)?;
            let payload = BookForm {
                title: new.title,
                author_id: author.id,
                book_link: new.link,
                genres: new.genres,
                average_rating: new.rating,
                published_year: new.year,
            }
            .into_payload(current_year())?;
            let book = client.create_book(&payload)?;
            println!("Book '{}' added with id {}.", book.title, book.id);
        }
        BookCommand::Update { book, changes } => {
            let books = client.list_books()?;
            let target = select::book(&books, &book)?;
            let author_id = match changes.author {
                Some(selector) => Some(select::author(&client.list_authors()?, &selector)?.id),
                None => None,
            };
            let payload = BookChanges {
                title: changes.title,
                author_id,
                book_link: changes.link,
                genres: changes.genres,
                average_rating: changes.rating,
                published_year: changes.year,
            }
            .apply(target)
            .into_payload(current_year())?;
            let book = client.update_book(target.id, &payload)?;
            println!("Book {} '{}' updated.", book.id, book.title);
        }
        BookCommand::Delete { book } => {
            let books = client.list_books()?;
            let target = select::book(&books, &book)?;
            let book = client.delete_book(target.id)?;
            println!("Book '{}' deleted.", book.title);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).attach_printable("dashboard command failed") {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            tracing::debug!("{report:?}");
            eprintln!("{}", report.current_context());
            ExitCode::FAILURE
        }
    }
}
