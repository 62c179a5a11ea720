//! Prompt builder
//!
//! Renders the fixed instruction template around the retrieved context and
//! the ticket. Pure and deterministic: same inputs, same prompt. The wording
//! is a prompt-engineering artifact; the contract is the three output keys
//! and that `action_required` is a short machine-actionable token.

use crate::rag::retriever::RetrievedDoc;

/// Build the generation prompt for a ticket and its retrieved context.
///
/// Docs are rendered in the order given, one entry per section, joined by
/// blank lines. An empty doc list renders an empty context block.
pub fn build_prompt(ticket: &str, docs: &[RetrievedDoc]) -> String {
    let context = docs
        .iter()
        .map(|doc| {
            format!(
                "{} — Section {} ({}):\n{}",
                doc.policy, doc.section, doc.title, doc.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"ROLE:
You are a knowledge assistant that analyzes customer support tickets
and produces structured, actionable responses based on retrieved documentation.

CONTEXT:
The following policy documents are provided to assist in answering the ticket:
{context}

TASK:
1. Analyze the user ticket.
2. Analyze the provided policy documents.
3. Generate a concise answer to the user's ticket based on the documents.
4. Determine which policy sections were referenced.
5. Assign an appropriate action required based on the analysis in the format action_required_by_policy.
6. Output the response strictly in the specified JSON format.

EXAMPLES:

Ticket: "My domain was suspended and I didn't get any notice. How can I reactivate it?"
Output:
{{
    "answer": "Your domain may have been suspended due to a violation of policy or missing WHOIS information. Please update your WHOIS details and contact support.",
    "references": ["Policy: Domain Suspension Guidelines, Section 4.2"],
    "action_required": "escalate_to_abuse_team"
}}

CONSTRAINTS:
- Provide answers strictly based on the provided documents.
- Output must be a single JSON object with keys: answer, references, action_required.
- Do not include any explanations outside the JSON format.
- Do not include any formatting or markdown in the output.
- The output schema is defined below.

OUTPUT SCHEMA:
{{
    "answer": "<short helpful explanation>",
    "references": ["<policy name - section title>"],
    "action_required": "<a concise, descriptive action like 'escalate_to_abuse_team' based on the analysis.>"
}}

USER TICKET:
{ticket}

FINAL INSTRUCTION:
Respond with ONLY the JSON. Do not say anything else."#
    )
}
