use std::path::PathBuf;

use chrono::Local;
use tabled::{settings::Style, Table, Tabled};

use crate::config::{Config, ConfigStore};
use crate::error::{InvoiceError, Result};
use crate::invoice::{Invoice, LineItem, Prompt};
use crate::pdf::render_invoice;

/// One interactive invoicing session. Owns the resolved configuration
/// and writes the counter back through the store every time a number
/// is auto-generated, before the invoice is confirmed.
pub struct Session<P> {
    config: Config,
    store: ConfigStore,
    output_dir: PathBuf,
    prompt: P,
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "DESCRIPTION")]
    description: String,
    #[tabled(rename = "QTY")]
    qty: i64,
    #[tabled(rename = "UNIT PRICE")]
    price: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
}

impl<P: Prompt> Session<P> {
    pub fn new(
        config: Config,
        store: ConfigStore,
        output_dir: impl Into<PathBuf>,
        prompt: P,
    ) -> Self {
        Self {
            config,
            store,
            output_dir: output_dir.into(),
            prompt,
        }
    }

    /// Resolved configuration, including the running counter.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Issue the next number in the sequence. The bumped counter is
    /// persisted immediately, together with the resolved company
    /// fields, so a cancelled invoice still consumes its number.
    pub fn next_invoice_number(&mut self) -> Result<String> {
        self.config.last_invoice_number += 1;
        self.store.save(&self.config)?;
        Ok(format!(
            "{}{:04}",
            self.config.invoice_prefix, self.config.last_invoice_number
        ))
    }

    /// Run one invoice cycle: prompt for every field, show the summary
    /// and render the PDF once confirmed.
    pub fn generate_invoice(&mut self) -> Result<()> {
        let number = self
            .prompt
            .line("Invoice number:", Some("press enter to auto-generate"))?;
        let number = if number.is_empty() {
            self.next_invoice_number()?
        } else {
            // Used verbatim; duplicates and odd formats are the
            // operator's business.
            number
        };

        let customer_name = self.prompt.line("Customer name:", None)?;
        let customer_address = self.prompt.line("Customer address:", None)?;

        let date = self
            .prompt
            .line("Invoice date (YYYY-MM-DD):", Some("press enter for today"))?;
        let date = if date.is_empty() {
            Local::now().format("%Y-%m-%d").to_string()
        } else {
            date
        };

        let items = self.collect_items()?;

        let invoice = Invoice {
            number,
            customer_name,
            customer_address,
            date,
            items,
        };

        println!();
        println!("{}", render_summary(&invoice));

        let confirm = self
            .prompt
            .line("Confirm and generate invoice? (yes/no)", None)?;
        if confirm.trim().to_lowercase() != "yes" {
            println!("Invoice creation cancelled.");
            return Ok(());
        }

        let pdf_path = self
            .output_dir
            .join(format!("Invoice_{}.pdf", invoice.number));
        render_invoice(
            &invoice,
            &self.config.company_name,
            &self.config.company_address,
            &pdf_path,
        )?;
        println!("Invoice {} generated successfully!", invoice.number);

        Ok(())
    }

    /// Keep generating invoices until the user declines.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.generate_invoice()?;

            let again = self
                .prompt
                .line("Generate another invoice? (yes/no)", None)?;
            if again.trim().to_lowercase() != "yes" {
                println!("Exiting invoice generator. Goodbye!");
                return Ok(());
            }
        }
    }

    fn collect_items(&mut self) -> Result<Vec<LineItem>> {
        let mut items = Vec::new();
        loop {
            let desc = self
                .prompt
                .line("Item description:", Some("type 'done' to finish"))?;
            if desc.eq_ignore_ascii_case("done") {
                break;
            }

            let qty = self.prompt.line("Quantity:", None)?;
            let qty: i64 = qty
                .trim()
                .parse()
                .map_err(|_| InvoiceError::InvalidQuantity(qty))?;

            let price = self.prompt.line("Price per unit:", None)?;
            let price: f64 = price
                .trim()
                .parse()
                .map_err(|_| InvoiceError::InvalidPrice(price))?;

            items.push(LineItem { desc, qty, price });
        }
        Ok(items)
    }
}

/// Plain-text summary shown before the confirmation prompt.
pub fn render_summary(invoice: &Invoice) -> String {
    let rows: Vec<ItemRow> = invoice
        .items
        .iter()
        .map(|item| ItemRow {
            description: item.desc.clone(),
            qty: item.qty,
            price: format!("{:.2}", item.price),
            amount: format!("{:.2}", item.line_total()),
        })
        .collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();

    let mut lines = vec![
        "Invoice Summary".to_string(),
        "-".repeat(50),
        format!("Number:   {}", invoice.number),
        format!("Customer: {}", invoice.customer_name),
        format!("Address:  {}", invoice.customer_address),
        format!("Date:     {}", invoice.date),
        table,
    ];
    lines.push(format!("Total Amount: {:.2}", invoice.total()));
    lines.join("\n")
}
