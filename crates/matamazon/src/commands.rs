//! # Command Logs
//!
//! A command log is a text file with one command per line, executed in order against a
//! [`Matamazon`] system:
//!
//! ```text
//! register supplier 1 Acme Haifa Main
//! register customer 2 Dan Karmiel Oak
//! add 10 Widget 9.99 1 5
//! order 2 10 3
//! search Wid 20
//! remove order 1
//! ```
//!
//! Blank lines are skipped and lines with an unknown verb are ignored. A known verb with
//! missing or unparsable arguments stops the run with
//! [`MatamazonError::InvalidCommand`], as does any error raised by the system itself.

use crate::error::{MatamazonError, Result};
use crate::lifecycle::Matamazon;
use crate::model::{Customer, Party, PartyKind, Product, RecordKind, Supplier};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Quantity ordered when an `order` line gives none.
const DEFAULT_ORDER_QUANTITY: u32 = 1;

/// One parsed log line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Register(Party),
    Upsert(Product),
    Order {
        customer_id: i64,
        product_id: i64,
        quantity: u32,
    },
    Remove {
        kind: RecordKind,
        id: i64,
    },
    Search {
        query: String,
        max_price: Option<f64>,
    },
}

/// Positional access to a line's tokens, reporting problems against the whole line.
struct Args<'a> {
    line: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> Args<'a> {
    fn invalid(&self, reason: impl Into<String>) -> MatamazonError {
        MatamazonError::InvalidCommand {
            line: self.line.to_string(),
            reason: reason.into(),
        }
    }

    fn expect_len(&self, allowed: &[usize]) -> Result<()> {
        if allowed.contains(&self.tokens.len()) {
            Ok(())
        } else {
            Err(self.invalid(format!(
                "expected {} arguments, got {}",
                allowed
                    .iter()
                    .map(|n| (n - 1).to_string())
                    .collect::<Vec<_>>()
                    .join(" or "),
                self.tokens.len() - 1
            )))
        }
    }

    fn text(&self, index: usize) -> Result<&'a str> {
        self.tokens
            .get(index)
            .copied()
            .ok_or_else(|| self.invalid(format!("missing argument {index}")))
    }

    fn value<T: FromStr>(&self, index: usize, what: &str) -> Result<T> {
        let raw = self.text(index)?;
        raw.parse()
            .map_err(|_| self.invalid(format!("invalid {what} '{raw}'")))
    }

    fn optional<T: FromStr>(&self, index: usize, what: &str) -> Result<Option<T>> {
        match self.tokens.get(index) {
            Some(_) => self.value(index, what).map(Some),
            None => Ok(None),
        }
    }
}

impl Command {
    /// Parses one log line.
    ///
    /// Returns `Ok(None)` for blank lines and unknown verbs.
    ///
    /// # Errors
    /// `InvalidCommand` for a known verb with bad arguments, and the entity-rule errors
    /// (`InvalidIdentifier`, `InvalidPrice`) of the record being built.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let args = Args {
            line: line.trim(),
            tokens: line.split_whitespace().collect(),
        };
        let Some(&verb) = args.tokens.first() else {
            return Ok(None);
        };

        let command = match verb {
            "register" => {
                args.expect_len(&[6])?;
                let kind = match args.text(1)? {
                    "customer" => PartyKind::Customer,
                    "supplier" => PartyKind::Supplier,
                    other => return Err(args.invalid(format!("unknown party kind '{other}'"))),
                };
                let id = args.value(2, "id")?;
                let (name, city, address) = (args.text(3)?, args.text(4)?, args.text(5)?);
                let party = match kind {
                    PartyKind::Customer => Party::from(Customer::new(id, name, city, address)?),
                    PartyKind::Supplier => Party::from(Supplier::new(id, name, city, address)?),
                };
                Command::Register(party)
            }
            "add" | "update" => {
                args.expect_len(&[6])?;
                Command::Upsert(Product::new(
                    args.value(1, "id")?,
                    args.text(2)?,
                    args.value(3, "price")?,
                    args.value(4, "supplier id")?,
                    args.value(5, "quantity")?,
                )?)
            }
            "order" => {
                args.expect_len(&[3, 4])?;
                Command::Order {
                    customer_id: args.value(1, "customer id")?,
                    product_id: args.value(2, "product id")?,
                    quantity: args
                        .optional(3, "quantity")?
                        .unwrap_or(DEFAULT_ORDER_QUANTITY),
                }
            }
            "remove" => {
                args.expect_len(&[3])?;
                let raw = args.text(1)?;
                let kind = raw
                    .parse::<RecordKind>()
                    .map_err(|reason| args.invalid(reason))?;
                Command::Remove {
                    kind,
                    id: args.value(2, "id")?,
                }
            }
            "search" => {
                args.expect_len(&[2, 3])?;
                Command::Search {
                    query: args.text(1)?.to_string(),
                    max_price: args.optional(2, "max price")?,
                }
            }
            other => {
                warn!(verb = other, "Ignoring unknown command");
                return Ok(None);
            }
        };
        Ok(Some(command))
    }
}

/// Renders products the way `search` prints them: `[rec, rec]`, or `[]`.
pub fn render_products(products: &[&Product]) -> String {
    let records = products
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{records}]")
}

/// Runs one command. Returns the text to print, if the command produces any.
pub fn execute(system: &mut Matamazon, command: Command) -> Result<Option<String>> {
    match command {
        Command::Register(party) => {
            system.register_entity(party)?;
            Ok(None)
        }
        Command::Upsert(product) => {
            system.add_or_update_product(product)?;
            Ok(None)
        }
        Command::Order {
            customer_id,
            product_id,
            quantity,
        } => {
            let outcome = system.place_order(customer_id, product_id, quantity)?;
            info!(customer_id, product_id, quantity, %outcome, "Order processed");
            Ok(None)
        }
        Command::Remove { kind, id } => {
            if let Some(restored) = system.remove_object(id, kind)? {
                debug!(id, restored, "Stock restored");
            }
            Ok(None)
        }
        Command::Search { query, max_price } => Ok(Some(render_products(
            &system.search_products(&query, max_price),
        ))),
    }
}

/// Executes every line of `log` in order, writing command output to `out`.
///
/// # Errors
/// Stops at the first failing line. Commands before it stay applied.
#[instrument(skip_all)]
pub fn run_log<R: BufRead, W: Write>(system: &mut Matamazon, log: R, out: &mut W) -> Result<()> {
    let mut executed = 0usize;
    for line in log.lines() {
        let line = line?;
        let Some(command) = Command::parse(&line)? else {
            continue;
        };
        if let Some(text) = execute(system, command)? {
            writeln!(out, "{text}")?;
        }
        executed += 1;
    }
    out.flush()?;
    info!(commands = executed, "Log executed");
    Ok(())
}
