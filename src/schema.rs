//! Wire schemas for the quote exchange.
//!
//! Element names and namespace URIs are fixed for compatibility with the
//! upstream service. They are constants with an explicit prefix table, never
//! configuration, and the target documents are built by typed builders
//! rather than string embedding.

use xmltree::{Element, Namespace, XMLNode};

/// Namespace of the delayed-quotes request schema.
pub const QUOTE_NS: &str = "urn:xmethods-delayed-quotes";
/// Namespace of the quote response schema.
pub const SERVICES_NS: &str = "http://services.samples/xsd";
/// XML Schema instance namespace.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
/// XML Schema namespace.
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema";

/// Prefix bound to [`SERVICES_NS`] in the response target document.
pub const RESPONSE_PREFIX: &str = "ns";

/// Root element of a quote request.
pub const REQUEST_ROOT: &str = "getQuote";
/// Root element of a quote response.
pub const RESPONSE_ROOT: &str = "getQuoteResponse";
/// Element carrying the ticker symbol.
pub const SYMBOL_ELEMENT: &str = "symbol";
/// Element carrying the scalar result in the upstream response.
pub const RESULT_ELEMENT: &str = "Result";
/// Wrapper element in the response target document.
pub const RETURN_ELEMENT: &str = "return";
/// Element carrying the last trade price in the response target document.
pub const LAST_ELEMENT: &str = "last";

/// Build the request target document embedding the extracted symbol.
///
/// ```xml
/// <getQuote xmlns="urn:xmethods-delayed-quotes">
///   <symbol xsi:type="xsd:string">IBM</symbol>
/// </getQuote>
/// ```
pub fn build_quote_request(symbol: &str) -> Element {
    let mut root = Element::new(REQUEST_ROOT);
    root.namespace = Some(QUOTE_NS.to_string());
    let mut ns = Namespace::empty();
    ns.put("", QUOTE_NS);
    ns.put("xsi", XSI_NS);
    ns.put("xsd", XSD_NS);
    root.namespaces = Some(ns);

    let mut symbol_el = Element::new(SYMBOL_ELEMENT);
    symbol_el.namespace = Some(QUOTE_NS.to_string());
    symbol_el
        .attributes
        .insert("xsi:type".to_string(), "xsd:string".to_string());
    symbol_el.children.push(XMLNode::Text(symbol.to_string()));

    root.children.push(XMLNode::Element(symbol_el));
    root
}

/// Build the response target document embedding the extracted result value.
///
/// ```xml
/// <ns:getQuoteResponse xmlns:ns="http://services.samples/xsd">
///   <ns:return><ns:last>93.25</ns:last></ns:return>
/// </ns:getQuoteResponse>
/// ```
pub fn build_quote_response(last: &str) -> Element {
    let mut root = Element::new(RESPONSE_ROOT);
    root.prefix = Some(RESPONSE_PREFIX.to_string());
    root.namespace = Some(SERVICES_NS.to_string());
    let mut ns = Namespace::empty();
    ns.put(RESPONSE_PREFIX, SERVICES_NS);
    root.namespaces = Some(ns);

    let mut last_el = Element::new(LAST_ELEMENT);
    last_el.prefix = Some(RESPONSE_PREFIX.to_string());
    last_el.namespace = Some(SERVICES_NS.to_string());
    last_el.children.push(XMLNode::Text(last.to_string()));

    let mut return_el = Element::new(RETURN_ELEMENT);
    return_el.prefix = Some(RESPONSE_PREFIX.to_string());
    return_el.namespace = Some(SERVICES_NS.to_string());
    return_el.children.push(XMLNode::Element(last_el));

    root.children.push(XMLNode::Element(return_el));
    root
}
