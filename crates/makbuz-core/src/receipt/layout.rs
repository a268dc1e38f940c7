//! Receipt layout classification.

use serde::{Deserialize, Serialize};

/// Marker phrase printed in the header of e-arşiv slips.
const E_INVOICE_HEADER: &str = "E-ARŞİV FATURA BİLGİ FİŞİ";
/// Device code that also identifies e-arşiv output.
const E_INVOICE_CODE: &str = "GMU 507";

/// The three receipt layouts common in the Turkish market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceiptLayout {
    /// Plain cash-register receipt (yazar kasa fişi).
    Classic,
    /// E-arşiv invoice information slip.
    EInvoice,
    /// Bank POS card slip.
    PosSlip,
}

/// Decide which layout a transcript belongs to.
///
/// Total and deterministic: first marker wins, anything unrecognized is a
/// classic receipt. The e-arşiv markers are matched case-sensitively; the
/// POS markers against the upper-cased transcript.
pub fn classify(text: &str) -> ReceiptLayout {
    if text.contains(E_INVOICE_HEADER) || text.contains(E_INVOICE_CODE) {
        return ReceiptLayout::EInvoice;
    }

    let upper = text.to_uppercase();
    if upper.contains("TÜRKİYE İŞ BANKASI") && upper.contains("PAYWAVE") {
        return ReceiptLayout::PosSlip;
    }

    ReceiptLayout::Classic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_classic() {
        assert_eq!(classify(""), ReceiptLayout::Classic);
    }

    #[test]
    fn gmu_code_forces_e_invoice() {
        assert_eq!(classify("whatever\nGMU 507\nmore"), ReceiptLayout::EInvoice);
    }

    #[test]
    fn e_invoice_header_is_case_sensitive() {
        assert_eq!(classify("E-ARŞİV FATURA BİLGİ FİŞİ"), ReceiptLayout::EInvoice);
        assert_eq!(classify("e-arşiv fatura bilgi fişi"), ReceiptLayout::Classic);
    }

    #[test]
    fn pos_needs_both_bank_and_paywave() {
        assert_eq!(
            classify("TÜRKİYE İŞ BANKASI\nPAYWAVE\nSATIŞ"),
            ReceiptLayout::PosSlip
        );
        assert_eq!(classify("TÜRKİYE İŞ BANKASI\nSATIŞ"), ReceiptLayout::Classic);
        assert_eq!(classify("PAYWAVE"), ReceiptLayout::Classic);
    }

    #[test]
    fn e_invoice_marker_wins_over_pos_markers() {
        assert_eq!(
            classify("GMU 507\nTÜRKİYE İŞ BANKASI\nPAYWAVE"),
            ReceiptLayout::EInvoice
        );
    }
}
