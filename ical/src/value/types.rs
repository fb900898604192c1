// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::keyword::{
    KW_BINARY, KW_BOOLEAN, KW_CAL_ADDRESS, KW_DATE, KW_DATE_TIME, KW_DURATION, KW_FLOAT,
    KW_INTEGER, KW_PERIOD, KW_RECUR, KW_TEXT, KW_TIME, KW_URI, KW_UTC_OFFSET, keyword_enum,
};

keyword_enum! {
    /// Value data types, as named by the `VALUE` parameter (RFC 5545 Section 3.2.20).
    pub enum ValueType {
        /// Inline binary data, Base64 encoded
        Binary      => KW_BINARY,
        /// `TRUE` or `FALSE`
        Boolean     => KW_BOOLEAN,
        /// Calendar user address, a URI
        CalAddress  => KW_CAL_ADDRESS,
        /// Calendar date
        Date        => KW_DATE,
        /// Date with local, UTC or zoned time
        DateTime    => KW_DATE_TIME,
        /// Duration of time
        Duration    => KW_DURATION,
        /// Real number
        Float       => KW_FLOAT,
        /// Signed integer
        Integer     => KW_INTEGER,
        /// Precise period of time
        Period      => KW_PERIOD,
        /// Recurrence rule
        Recur       => KW_RECUR,
        /// Free text
        Text        => KW_TEXT,
        /// Time of day
        Time        => KW_TIME,
        /// Uniform resource identifier
        Uri         => KW_URI,
        /// Offset from UTC
        UtcOffset   => KW_UTC_OFFSET,
    }
}
