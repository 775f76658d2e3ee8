//! `system` module: ACH, positive pay, invoices and bulk data downloads.
//!
//! Several of these are download or stream style operations upstream. They are still
//! plain GETs returning JSON that describes status or download URLs.

use super::{CLIENT_ID, COUNT, DOWNLOAD_ID, Endpoint, OPT_CLIENT_ID, ParamSpec, STARTPAGE};

const CLIENT_IDS: ParamSpec = ParamSpec::opt_list("clientId", "Client identifiers");
const REQUIRED_DOWNLOAD_ID: ParamSpec =
    ParamSpec::text("downloadId", "Download identifier returned by the request that prepared the file");

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint::new(
        "get_ach_file_list",
        "/system/v1/getACHFileList",
        "Get ACH files posted in a date range.",
        &[
            ParamSpec::opt_text("originatorId", "ACH originator identifier"),
            ParamSpec::text("postDateStart", "Start of the post date range (YYYY-MM-DD)"),
            ParamSpec::text("postDateEnd", "End of the post date range (YYYY-MM-DD)"),
            COUNT,
            STARTPAGE,
        ],
    ),
    Endpoint::new(
        "get_ar_transaction_report",
        "/system/v1/getARTransactionReport",
        "Prepare or poll the accounts receivable transaction report for a date range.",
        &[
            ParamSpec::text("startDate", "Start of the date range (YYYY-MM-DD)"),
            ParamSpec::text("endDate", "End of the date range (YYYY-MM-DD)"),
            DOWNLOAD_ID,
            CLIENT_IDS,
        ],
    ),
    Endpoint::new(
        "get_data",
        "/system/v1/getData",
        "Prepare or poll a bulk export of a PrismHR data class.",
        &[
            ParamSpec::text("schemaName", "Schema name"),
            ParamSpec::text("className", "Class name"),
            DOWNLOAD_ID,
            CLIENT_IDS,
        ],
    ),
    Endpoint::new(
        "get_employer_details",
        "/system/v1/getEmployerDetails",
        "Get the details of an employer (legal entity).",
        &[ParamSpec::text("employerId", "Employer identifier")],
    ),
    Endpoint::new(
        "get_invoice_data",
        "/system/v1/getInvoiceData",
        "Get invoice data of a client.",
        &[
            CLIENT_ID,
            ParamSpec::opt_text("batchId", "Payroll batch identifier"),
            ParamSpec::opt_text("invoiceId", "Invoice identifier"),
        ],
    ),
    Endpoint::new(
        "get_multi_entity_group_list",
        "/system/v1/getMultiEntityGroupList",
        "Get multi-entity groups.",
        &[
            COUNT,
            STARTPAGE,
            OPT_CLIENT_ID,
            ParamSpec::opt_text("multiEntityGroupId", "Multi-entity group identifier"),
        ],
    ),
    Endpoint::new(
        "get_payee",
        "/system/v1/getPayee",
        "Get a payee.",
        &[
            ParamSpec::text("payeeId", "Payee identifier"),
            ParamSpec::opt_text("payeeType", "Payee type"),
        ],
    ),
    Endpoint::new(
        "get_payments_pending",
        "/system/v1/getPaymentsPending",
        "Get payments pending release.",
        &[
            OPT_CLIENT_ID,
            ParamSpec::opt_text("batchId", "Payroll batch identifier"),
            ParamSpec::opt_text("status", "Payment status filter"),
        ],
    ),
    Endpoint::new(
        "get_positive_pay_check_stub",
        "/system/v1/getPositivePayCheckStub",
        "Get the positive pay check stub configuration.",
        &[],
    ),
    Endpoint::new(
        "get_positive_pay_file_list",
        "/system/v1/getPositivePayFileList",
        "Get generated positive pay files.",
        &[
            ParamSpec::opt_text("checkingAcct", "Checking account"),
            ParamSpec::opt_text("fileStub", "File name stub"),
            ParamSpec::opt_text("dateCreated", "Creation date (YYYY-MM-DD)"),
            ParamSpec::opt_flag("mostRecent", "Only return the most recent file"),
            COUNT,
            STARTPAGE,
        ],
    ),
    Endpoint::new(
        "get_unbilled_benefit_adjustments",
        "/system/v1/getUnbilledBenefitAdjustments",
        "Prepare or poll benefit adjustments that have not been billed yet.",
        &[
            DOWNLOAD_ID,
            CLIENT_IDS,
            ParamSpec::opt_text("startDate", "Start of the date range (YYYY-MM-DD)"),
            ParamSpec::opt_text("endDate", "End of the date range (YYYY-MM-DD)"),
            ParamSpec::opt_text("includeTermClient", "Include terminated clients (true/false)"),
            ParamSpec::opt_text("statusClass", "Employee status class filter"),
        ],
    ),
    Endpoint::new(
        "identify_ach_process_lock",
        "/system/v1/identifyACHProcessLock",
        "Identify which process holds the ACH processing lock.",
        &[],
    ),
    Endpoint::new(
        "positive_pay_download",
        "/system/v1/positivePayDownload",
        "Prepare or poll a positive pay file download for a check date range.",
        &[
            DOWNLOAD_ID,
            ParamSpec::text("checkingAccount", "Checking account"),
            ParamSpec::opt_text("fileStub", "File name stub"),
            ParamSpec::text("startCheckDate", "Start of the check date range (YYYY-MM-DD)"),
            ParamSpec::text("endCheckDate", "End of the check date range (YYYY-MM-DD)"),
            ParamSpec::opt_flag("includeVoidedChecks", "Include voided checks"),
        ],
    ),
    Endpoint::new(
        "recreate_positive_pay",
        "/system/v1/recreatePositivePay",
        "Recreate a previously generated positive pay file.",
        &[
            REQUIRED_DOWNLOAD_ID,
            ParamSpec::text("fileName", "Positive pay file name"),
        ],
    ),
    Endpoint::new(
        "stream_ach_data",
        "/system/v1/streamACHData",
        "Get the content of an ACH batch file.",
        &[
            ParamSpec::text("achBatchId", "ACH batch identifier"),
            ParamSpec::opt_text("achFileName", "ACH file name"),
        ],
    ),
];
