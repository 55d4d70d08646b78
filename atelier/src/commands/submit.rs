use anyhow::bail;
use atelier_client_impl::HttpSubmissionClient;
use atelier_config::Config;
use atelier_form::ContactForm;
use atelier_models::form::{BudgetRange, FormField, SubmissionPhase};
use clap::Args;

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Your full name
    #[arg(long)]
    name: String,
    /// Your email address
    #[arg(long)]
    email: String,
    /// Company or studio you represent
    #[arg(long)]
    company: Option<String>,
    /// Budget range for the project (15k-25k, 25k-50k, 50k-100k, 100k+, retainer)
    #[arg(long)]
    budget: Option<BudgetRange>,
    /// What you would like to build together
    #[arg(long)]
    message: String,
}

pub async fn submit(config: Config, args: SubmitArgs) -> anyhow::Result<()> {
    let client = HttpSubmissionClient::new(config.submission.endpoint);
    let mut form = ContactForm::new(client);

    form.edit(FormField::Name, args.name);
    form.edit(FormField::Email, args.email);
    if let Some(company) = args.company {
        form.edit(FormField::Company, company);
    }
    if let Some(budget) = args.budget {
        form.edit(FormField::Budget, budget.as_str());
    }
    form.edit(FormField::Message, args.message);

    match form.submit().await {
        SubmissionPhase::Succeeded { ack } => {
            println!("{ack}");
            Ok(())
        }
        SubmissionPhase::Failed { message } => bail!(message),
        SubmissionPhase::Editing => {
            for (field, error) in form.errors().iter() {
                eprintln!("{field}: {error}");
            }
            bail!("The form was not submitted; fix the fields above and try again");
        }
        SubmissionPhase::Submitting => unreachable!(),
    }
}
