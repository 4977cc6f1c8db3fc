#[cfg(test)]
mod rendering_tests {
    use crate::{Attributes, Entity, Environment, Error, Role, RunListItem, ToDsl, Value};

    fn attrs(entries: Vec<(&str, Value)>) -> Attributes {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    fn web_role() -> Role {
        Role::new("web")
            .description("Web tier")
            .run_list(vec![RunListItem::recipe("nginx"), RunListItem::recipe("app")])
    }

    #[test]
    fn test_role_scenario() {
        let output = web_role().to_dsl().unwrap();

        let expected = "\
# encoding: utf-8

name(
  'web'
)

description(
  'Web tier'
)

default_attributes(
  {}
)

override_attributes(
  {}
)

run_list(
  'recipe[nginx]',
  'recipe[app]'
)";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_role_sections_appear_in_order() {
        let output = web_role().to_dsl().unwrap();

        let sections = [
            "name(\n  'web'\n)",
            "description(\n  'Web tier'\n)",
            "default_attributes(\n  {}\n)",
            "run_list(\n  'recipe[nginx]',\n  'recipe[app]'\n)",
        ];
        let positions: Vec<usize> = sections
            .iter()
            .map(|section| output.find(section).expect(section))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_environment_scenario() {
        let env = Environment::new("prod")
            .cookbook("nginx", ">= 1.0")
            .cookbook("app", "= 2.3");
        let output = env.to_dsl().unwrap();

        let expected = "\
name(
  'prod'
)

description(
  ''
)

cookbook(
  'nginx',
  '>= 1.0'
)
cookbook(
  'app',
  '= 2.3'
)

default_attributes(
  {}
)

override_attributes(
  {}
)";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_run_list_used_with_at_most_one_env_run_list() {
        let role = web_role();
        let output = role.to_dsl().unwrap();
        assert!(output.contains("run_list("));
        assert!(!output.contains("env_run_lists("));

        let role = web_role().env_run_list("_default", vec![RunListItem::recipe("nginx")]);
        let output = role.to_dsl().unwrap();
        assert!(output.contains("\nrun_list(\n  'recipe[nginx]',\n  'recipe[app]'\n)"));
        assert!(!output.contains("env_run_lists("));
    }

    #[test]
    fn test_env_run_lists_used_with_two_or_more() {
        let role = web_role()
            .env_run_list("_default", vec![RunListItem::recipe("nginx"), RunListItem::recipe("app")])
            .env_run_list("production", vec![RunListItem::role("base"), RunListItem::recipe("app")]);
        let output = role.to_dsl().unwrap();

        assert!(!output.contains("\nrun_list("));
        assert!(output.ends_with(
            "\
env_run_lists(
  {
    '_default' => [
      'recipe[nginx]',
      'recipe[app]'
    ],
    'production' => [
      'role[base]',
      'recipe[app]'
    ]
  }
)"
        ));
    }

    #[test]
    fn test_nested_attributes() {
        let role = Role::new("db").default_attributes(attrs(vec![
            ("mysql", Value::Hash(attrs(vec![
                ("port", Value::Integer(3306)),
                ("bind", Value::from("0.0.0.0")),
                ("tuning", Value::Hash(attrs(vec![("buffer", Value::Float(0.5))]))),
            ]))),
            ("backups", Value::Array(vec![Value::from("daily"), Value::Nil])),
        ]));
        let output = role.to_dsl().unwrap();

        let expected = "\
default_attributes(
  {
    'mysql' => {
      'port' => 3306,
      'bind' => '0.0.0.0',
      'tuning' => {
        'buffer' => 0.5
      }
    },
    'backups' => [
      'daily',
      nil
    ]
  }
)";
        assert!(output.contains(expected), "output was:\n{}", output);
    }

    #[test]
    fn test_quotes_in_entity_strings_are_escaped() {
        let role = Role::new("o'brien").description(r"path C:\chef");
        let output = role.to_dsl().unwrap();
        assert!(output.contains(r"name(
  'o\'brien'
)"));
        assert!(output.contains(r"'path C:\\chef'"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let entity = Entity::from(
            web_role().override_attributes(attrs(vec![("b", Value::Integer(1)), ("a", Value::Integer(2))])),
        );
        assert_eq!(entity.to_dsl().unwrap(), entity.to_dsl().unwrap());
    }

    #[test]
    fn test_no_trailing_whitespace() {
        let role = web_role().description("multi\nline\n");
        let env = Environment::new("empty");

        for output in [role.to_dsl().unwrap(), env.to_dsl().unwrap()] {
            assert!(!output.ends_with('\n'));
            for line in output.lines() {
                assert_eq!(line, line.trim_end(), "line has trailing whitespace: {:?}", line);
            }
        }
    }

    #[test]
    fn test_environment_without_cookbooks() {
        let output = Environment::new("dev").description("Dev").to_dsl().unwrap();
        assert!(output.contains("description(\n  'Dev'\n)\n\n\ndefault_attributes("));
        assert!(!output.contains("cookbook("));
    }

    #[test]
    fn test_json_to_dsl_unsupported_kind() {
        let result = crate::json_to_dsl(r#"{"name": "node1", "json_class": "Chef::Node"}"#);
        match result {
            Err(Error::UnsupportedEntityKind(kind)) => assert_eq!(kind, "Chef::Node"),
            other => panic!("expected UnsupportedEntityKind, got {:?}", other),
        }
    }
}
