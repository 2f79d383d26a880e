//! Typed client for M-Pesa payments.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | POST   | `/payments/stk-push?b_id` | Push an STK prompt to the payer's phone |
//! | POST   | `/payments/verify?b_id` | Verify a payment by transaction code |
//!
//! Both calls only start or confirm a payment on the processor side. No
//! polling or local settlement state is kept here.

use serde::{Deserialize, Serialize};

use crate::envelope::ApiResponse;
use crate::error::MtaaniError;
use crate::transport::Transport;
use crate::types::{BusinessId, BusinessScope, PackageId};

/// Kind of package referenced in a payment batch.
///
/// Wider than [`crate::packages::PackageKind`]: errands, rentals and sales
/// are payable too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPackageType {
    Agent,
    Doorstep,
    Errand,
    Rent,
    Sale,
    Express,
}

/// `{id, type}` pair identifying one package in a payment batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPackage {
    pub id: PackageId,
    #[serde(rename = "type")]
    pub package_type: PaymentPackageType,
}

#[derive(Debug, Clone, Serialize)]
pub struct StkPushRequest {
    pub packages: Vec<PaymentPackage>,
    /// Payer's phone, Kenyan format.
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyPaymentRequest {
    pub packages: Vec<PaymentPackage>,
    /// M-Pesa transaction code from the payer's confirmation SMS.
    pub transcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct PaymentsClient {
    transport: Transport,
}

impl PaymentsClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Prompt the payer's phone to pay for a batch of packages.
    ///
    /// The phone number is validated before anything is sent.
    pub async fn pay_with_stk(
        &self,
        business_id: BusinessId,
        req: &StkPushRequest,
    ) -> Result<PaymentResponse, MtaaniError> {
        mtaani_core::validate_phone_number(&req.phone)?;
        self.send("/payments/stk-push", business_id, req).await
    }

    pub async fn verify_payment(
        &self,
        business_id: BusinessId,
        req: &VerifyPaymentRequest,
    ) -> Result<PaymentResponse, MtaaniError> {
        self.send("/payments/verify", business_id, req).await
    }

    // The processor answers either a bare `{success, message}` or the usual
    // envelope wrapping one; both are accepted.
    async fn send<B: Serialize>(
        &self,
        path: &str,
        business_id: BusinessId,
        body: &B,
    ) -> Result<PaymentResponse, MtaaniError> {
        let resp: ApiResponse<PaymentResponse> = self
            .transport
            .post(path, Some(body), Some(&BusinessScope { b_id: business_id }))
            .await?;
        Ok(match resp.data {
            Some(inner) => inner,
            None => PaymentResponse {
                success: resp.success.unwrap_or(false),
                message: resp.message.unwrap_or_default(),
            },
        })
    }
}
