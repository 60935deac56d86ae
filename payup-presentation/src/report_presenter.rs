use crate::{
    number_format::{format_amount, format_share},
    text_table::{Alignment, TextTableBuilder},
};
use payup_domain::{BalanceSheet, SettlementReport, Transfer};
use payup_i18n as i18n;
use std::borrow::Cow;

pub struct ReportPresenter;

impl ReportPresenter {
    /// Plain lines suitable for pasting into a chat: totals, then one line per transfer.
    pub fn clipboard_text(report: &SettlementReport<'_>) -> String {
        let mut lines = Self::summary_lines(report);
        lines.extend(report.transfers.iter().map(|transfer| {
            format!(
                "{} → {}: {}{}",
                transfer.from,
                transfer.to,
                format_amount(transfer.amount),
                i18n::CURRENCY_SUFFIX
            )
        }));
        lines.join("\n")
    }

    /// Full terminal view with balance and transfer tables.
    pub fn render(report: &SettlementReport<'_>) -> String {
        let mut sections = vec![
            i18n::RESULT_TITLE.to_string(),
            Self::summary_lines(report).join("\n"),
        ];
        if !report.balances.is_empty() {
            sections.push(Self::build_balance_table(&report.balances));
        }
        if report.is_settled() {
            sections.push(i18n::ALREADY_SETTLED.to_string());
        } else {
            sections.push(Self::build_transfer_table(&report.transfers));
        }

        let mut view = sections
            .iter()
            .map(|section| section.trim_end())
            .collect::<Vec<_>>()
            .join("\n\n");
        view.push('\n');
        view
    }

    pub fn build_balance_table(balances: &BalanceSheet<'_>) -> String {
        let headers = [Cow::Borrowed(i18n::MEMBER), Cow::Borrowed(i18n::BALANCE)];
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&headers);

        for (name, balance) in balances.iter() {
            builder = builder.row([Cow::Borrowed(name), Cow::Owned(signed_share(balance))]);
        }

        builder.build()
    }

    pub fn build_transfer_table(transfers: &[Transfer<'_>]) -> String {
        let headers = [
            Cow::Borrowed(i18n::FROM),
            Cow::Borrowed(i18n::TO),
            Cow::Borrowed(i18n::AMOUNT),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&headers);

        for transfer in transfers {
            builder = builder.row([
                Cow::Borrowed(transfer.from),
                Cow::Borrowed(transfer.to),
                Cow::Owned(format_amount(transfer.amount)),
            ]);
        }

        builder.build()
    }

    fn summary_lines(report: &SettlementReport<'_>) -> Vec<String> {
        vec![
            format!(
                "{}: {}{}",
                i18n::TOTAL_SPENT,
                format_amount(report.total_amount),
                i18n::CURRENCY_SUFFIX
            ),
            format!(
                "{}: {}{}",
                i18n::PER_PERSON_SHARE,
                format_share(report.per_person_share),
                i18n::CURRENCY_SUFFIX
            ),
        ]
    }
}

fn signed_share(balance: f64) -> String {
    let text = format_share(balance);
    if text.starts_with('-') || text == "0" {
        text
    } else {
        format!("+{text}")
    }
}
