use educa_config::EmailConfig;
use educa_core::AppError;
use lettre::message::{MultiPart, SinglePart, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{info, instrument};

/// Outgoing mail for the password reset flow.
///
/// With `SMTP_ENABLED` unset, messages are logged instead of sent.
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    #[instrument(skip(self, reset_token))]
    pub async fn send_password_reset_email(
        &self,
        to_email: &str,
        to_name: &str,
        reset_token: &str,
    ) -> Result<(), AppError> {
        let reset_link = self.config.reset_link(reset_token);

        let text_body = format!(
            "Hi {},\n\n\
             We received a request to reset your Educa password.\n\n\
             Open the link below to choose a new one:\n\
             {}\n\n\
             The link is valid for 1 hour and can only be used once.\n\n\
             If you did not ask for this, you can ignore this email.",
            to_name, reset_link
        );
        let html_body = password_reset_template(to_name, &reset_link);

        self.send_email(to_email, "Reset your password", &text_body, &html_body)
            .await
    }

    #[instrument(skip(self))]
    pub async fn send_password_reset_confirmation(
        &self,
        to_email: &str,
        to_name: &str,
    ) -> Result<(), AppError> {
        let text_body = format!(
            "Hi {},\n\n\
             Your Educa password was changed.\n\n\
             If this wasn't you, contact support right away.",
            to_name
        );
        let html_body = confirmation_template(to_name);

        self.send_email(to_email, "Your password was changed", &text_body, &html_body)
            .await
    }

    #[instrument(skip(self, html_body, text_body))]
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), AppError> {
        if !self.config.enabled {
            info!(to = %to_email, subject = %subject, "SMTP disabled, email not sent");
            return Ok(());
        }

        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let email = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| AppError::internal_error(format!("Invalid from email: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::internal_error(format!("Invalid to email: {}", e)))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| AppError::internal_error(format!("Failed to build email: {}", e)))?;

        let mailer = if self.config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| {
                    AppError::internal_error(format!("Failed to create SMTP relay: {}", e))
                })?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        };

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::internal_error(format!("Task join error: {}", e)))?
            .map_err(|e| AppError::internal_error(format!("Failed to send email: {}", e)))?;

        info!(to = %to_email, subject = %subject, "Email sent");
        Ok(())
    }
}

fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>{title}</title></head>
<body style="margin:0;padding:24px;font-family:Arial,sans-serif;background:#f4f4f4;">
  <div style="max-width:560px;margin:0 auto;background:#ffffff;border-radius:8px;overflow:hidden;">
    <div style="background:#0F766E;padding:24px;text-align:center;color:#ffffff;font-size:24px;">Educa</div>
    <div style="padding:32px;color:#444444;font-size:15px;line-height:1.5;">{content}</div>
    <div style="padding:16px;text-align:center;color:#999999;font-size:12px;border-top:1px solid #eeeeee;">
      Automated message from Educa. Please do not reply.
    </div>
  </div>
</body>
</html>"#
    )
}

fn password_reset_template(name: &str, reset_link: &str) -> String {
    layout(
        "Reset your password",
        &format!(
            r#"<p>Hi <strong>{name}</strong>,</p>
<p>We received a request to reset your password.</p>
<p style="text-align:center;margin:28px 0;">
  <a href="{reset_link}" style="padding:12px 32px;background:#0F766E;color:#ffffff;text-decoration:none;border-radius:6px;">Choose a new password</a>
</p>
<p style="word-break:break-all;font-size:13px;">{reset_link}</p>
<p><strong>The link is valid for 1 hour.</strong></p>"#
        ),
    )
}

fn confirmation_template(name: &str) -> String {
    layout(
        "Your password was changed",
        &format!(
            r#"<p>Hi <strong>{name}</strong>,</p>
<p>Your password was changed successfully. You can now sign in with the new one.</p>
<p style="color:#92400E;">If you did not make this change, contact support immediately.</p>"#
        ),
    )
}
