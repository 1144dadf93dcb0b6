use tw_entities::email::*;

use super::EmailGateway;

/// Writes outgoing e-mails to the log instead of delivering them.
///
/// The default gateway while no mailer is configured.
#[derive(Debug, Clone, Default)]
pub struct SendToLog;

impl EmailGateway for SendToLog {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
        for to in recipients {
            log::info!(
                "Outgoing e-mail to {to}: {subject}\n{body}",
                subject = email.subject,
                body = email.body
            );
        }
    }
}
