/// Swift async API client generator

use crate::format::FormatOptions;
use crate::spec::{ArtifactKind, ArtifactSpec};
use crate::Generator;

pub struct SwiftApiClientGenerator;

impl Generator for SwiftApiClientGenerator {
    fn generate(&self, spec: &ArtifactSpec, fmt: &FormatOptions) -> String {
        generate_api_client(spec, fmt)
    }

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::ApiClient
    }
}

pub fn generate_api_client(spec: &ArtifactSpec, fmt: &FormatOptions) -> String {
    let mut lines: Vec<String> = Vec::new();
    let pad = fmt.indent(1);
    let pad2 = fmt.indent(2);
    let pad3 = fmt.indent(3);

    lines.push(format!("// {} - Generated API Client", spec.name));
    lines.push(String::new());
    lines.push("import Foundation".to_string());
    lines.push(String::new());
    lines.push(format!("actor {} {{", spec.name));
    lines.push(format!("{}private let baseURL: String", pad));
    lines.push(format!("{}private let session: URLSession", pad));
    lines.push(String::new());
    lines.push(format!(
        "{}init(baseURL: String, session: URLSession = .shared) {{",
        pad
    ));
    lines.push(format!("{}self.baseURL = baseURL", pad2));
    lines.push(format!("{}self.session = session", pad2));
    lines.push(format!("{}}}", pad));
    lines.push(String::new());
    lines.push(format!("{}{}", pad, fmt.section("Generic Request")));
    lines.push(String::new());

    // One shared request helper; every endpoint method delegates here.
    lines.push(format!("{}private func request<T: Decodable>(", pad));
    lines.push(format!("{}endpoint: String,", pad2));
    lines.push(format!("{}method: String = \"GET\",", pad2));
    lines.push(format!("{}body: Data? = nil", pad2));
    lines.push(format!("{}) async throws -> T {{", pad));
    lines.push(format!(
        "{}guard let url = URL(string: baseURL + endpoint) else {{",
        pad2
    ));
    lines.push(format!("{}throw URLError(.badURL)", pad3));
    lines.push(format!("{}}}", pad2));
    lines.push(String::new());
    lines.push(format!("{}var request = URLRequest(url: url)", pad2));
    lines.push(format!("{}request.httpMethod = method", pad2));
    lines.push(format!("{}request.httpBody = body", pad2));
    lines.push(format!(
        "{}request.setValue(\"application/json\", forHTTPHeaderField: \"Content-Type\")",
        pad2
    ));
    lines.push(String::new());
    lines.push(format!(
        "{}let (data, response) = try await session.data(for: request)",
        pad2
    ));
    lines.push(String::new());
    lines.push(format!(
        "{}guard let httpResponse = response as? HTTPURLResponse,",
        pad2
    ));
    lines.push(format!(
        "{}      (200...299).contains(httpResponse.statusCode) else {{",
        pad2
    ));
    lines.push(format!("{}throw URLError(.badServerResponse)", pad3));
    lines.push(format!("{}}}", pad2));
    lines.push(String::new());
    lines.push(format!(
        "{}return try JSONDecoder().decode(T.self, from: data)",
        pad2
    ));
    lines.push(format!("{}}}", pad));
    lines.push(String::new());
    lines.push(format!("{}{}", pad, fmt.section("Endpoints")));
    lines.push(String::new());

    // Endpoint path derives verbatim from the endpoint name.
    for endpoint in &spec.endpoints {
        lines.push(format!(
            "{}func {}() async throws -> {} {{",
            pad, endpoint.name, endpoint.return_type
        ));
        lines.push(format!(
            "{}try await request(endpoint: \"/{}\")",
            pad2, endpoint.name
        ));
        lines.push(format!("{}}}", pad));
        lines.push(String::new());
    }

    lines.push("}".to_string());

    lines.join("\n")
}
