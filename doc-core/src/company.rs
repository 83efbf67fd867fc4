//! Fixed company reference data rendered into every document.
//!
//! None of this is derived from the `Document`; it is static template
//! text (header contact lines, payment instructions, footer copy).

pub const ADDRESS_LINES: [&str; 2] = ["Kefan Building, Woodavenue Road", "(254) 728 309 380"];

pub const CONTACT_LINES: [&str; 2] = ["info@ladinatravelsafaris.com", "ladinatravelsafaris.com"];

pub const BANK_TRANSFER_TITLE: &str = "Bank Transfer";
pub const BANK_TRANSFER_LINES: [&str; 5] = [
    "Bank Name: NCBA, Kenya, Code-07000",
    "Bank Branch: Kilimani, Code-129",
    "Account Name: Ladina Travel Safaris",
    "Bank Account: 1007205933",
    "Swift Code: CBAFKENX",
];

pub const MOBILE_MONEY_TITLE: &str = "M-PESA";
pub const MOBILE_MONEY_LINES: [&str; 2] =
    ["MPESA Paybill: 880100", "Account Number: 1007205933"];

pub const THANK_YOU: &str = "Thank You for Your Business!";
pub const FOOTER_CONTACT: &str =
    "If you have any questions, please contact us at info@ladinatravelsafaris.com";

pub const RECEIPT_DISCLAIMER: &str = "This is a computer-generated receipt.";
