//! `generalLedger` module: GL postings, invoices and cash receipts.

use super::{
    BATCH_ID, CLIENT_ID, COUNT, DOWNLOAD_ID, Endpoint, OPT_CLIENT_ID, PAY_DATE_END,
    PAY_DATE_START, ParamSpec, STARTPAGE,
};

const GL_COMPANY: ParamSpec = ParamSpec::text("glCompany", "General ledger company code");
const TRAN_DATE: ParamSpec = ParamSpec::text("tranDate", "Transaction date (YYYY-MM-DD)");
const INV_DATE: ParamSpec = ParamSpec::text("invDate", "Invoice date (YYYY-MM-DD)");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_gl_cutback_check_post",
        "/generalLedger/v1/getGLCutbackCheckPost",
        "Get the GL posting of cutback checks for a transaction date.",
        &[GL_COMPANY, TRAN_DATE],
    ),
    Endpoint::new(
        "get_gl_data",
        "/generalLedger/v1/getGLData",
        "Get general ledger data of a given type.",
        &[ParamSpec::text("type", "GL data type")],
    ),
    Endpoint::new(
        "get_gl_invoice_post",
        "/generalLedger/v1/getGLInvoicePost",
        "Get the GL posting of invoices for an invoice date.",
        &[GL_COMPANY, INV_DATE],
    ),
    Endpoint::new(
        "get_gl_journal_post",
        "/generalLedger/v1/getGLJournalPost",
        "Get the GL journal posting for a transaction date.",
        &[GL_COMPANY, TRAN_DATE],
    ),
    Endpoint::new(
        "get_bulk_outstanding_invoices",
        "/generalLedger/v1/getBulkOutstandingInvoices",
        "Prepare or poll a bulk download of outstanding invoices.",
        &[OPT_CLIENT_ID, DOWNLOAD_ID],
    ),
    Endpoint::new(
        "get_client_accounting_template",
        "/generalLedger/v1/getClientAccountingTemplate",
        "Get the accounting template of a client.",
        &[CLIENT_ID],
    ),
    Endpoint::new(
        "get_client_gl_data",
        "/generalLedger/v1/getClientGLData",
        "Get a client's GL data for a pay date range.",
        &[CLIENT_ID, PAY_DATE_START, PAY_DATE_END],
    ),
    Endpoint::new(
        "get_gl_codes",
        "/generalLedger/v1/getGLCodes",
        "Get general ledger account codes.",
        &[ParamSpec::opt_text("glCode", "GL code")],
    ),
    Endpoint::new(
        "get_gl_detail_download",
        "/generalLedger/v1/getGLDetailDownload",
        "Get the GL detail of a payroll batch.",
        &[
            BATCH_ID,
            ParamSpec::list("clientId", "Client identifiers"),
            ParamSpec::opt_list("glDetailCodeType", "GL detail code types, e.g. P, T"),
        ],
    ),
    Endpoint::new(
        "get_gl_invoice_detail",
        "/generalLedger/v1/getGLInvoiceDetail",
        "Get GL invoice detail for an invoice date.",
        &[
            GL_COMPANY,
            INV_DATE,
            ParamSpec::opt_text("includePosted", "Include already posted invoices (true/false)"),
        ],
    ),
    Endpoint::new(
        "get_gl_setup",
        "/generalLedger/v1/getGLSetup",
        "Get a general ledger setup.",
        &[
            ParamSpec::text("glTemplate", "GL template"),
            ParamSpec::text("glType", "GL type"),
            ParamSpec::opt_text("glObjectId", "GL object identifier"),
        ],
    ),
    Endpoint::new(
        "get_outstanding_invoices",
        "/generalLedger/v1/getOutstandingInvoices",
        "Get a client's outstanding invoices.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("showOnlyDepositMatch", "Only invoices matching a deposit (true/false)"),
        ],
    ),
    Endpoint::new(
        "get_pending_cash_receipts",
        "/generalLedger/v1/getPendingCashReceipts",
        "Get cash receipts pending posting.",
        &[
            ParamSpec::opt_text("cashReceiptBatchId", "Cash receipt batch identifier"),
            ParamSpec::opt_text("includePostType", "Posting types to include"),
            ParamSpec::opt_text("includeDepositType", "Deposit types to include"),
            COUNT,
            STARTPAGE,
        ],
    ),
    Endpoint::new(
        "get_client_gl_data_v2",
        "/generalLedger/v2/getClientGLData",
        "Get a client's GL data for a pay date range (version 2 response shape).",
        &[CLIENT_ID, PAY_DATE_START, PAY_DATE_END],
    ),
];
